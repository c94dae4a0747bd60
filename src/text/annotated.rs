//! Annotated text: content plus derived entity occurrences and styles.
//!
//! [`AnnotatedText`] owns the text and its configuration. Every mutation
//! re-derives the occurrence index and the styled segments in full before
//! returning, so a query made right after a mutation always sees its
//! effects. The rebuild is staged on the side and swapped in, so a
//! rejected configuration leaves the previous state untouched.

use crate::entity::{
    EntityKind, EntityKinds, EntityScanner, HitBounds, Occurrence, OccurrenceIndex,
};
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log, emit_log_with};
use crate::style::Style;
use crate::text::fixup::GlyphFixup;
use crate::text::rope::RopeWrapper;
use crate::text::segment::{self, SegmentSource, StyledRun, StyledSegment};
use crate::theme::StyleTable;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

/// Initial configuration for an [`AnnotatedText`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnnotatorOptions {
    /// Kinds detected and styled.
    pub enabled_kinds: EntityKinds,
    /// Usernames recognized with or without a leading `@`.
    pub usernames: Vec<String>,
    /// Per-kind styles and base style.
    pub styles: StyleTable,
    /// Upper-bound rule for `occurrence_at`.
    pub hit_bounds: HitBounds,
}

impl AnnotatorOptions {
    #[must_use]
    pub fn with_enabled_kinds(mut self, kinds: EntityKinds) -> Self {
        self.enabled_kinds = kinds;
        self
    }

    #[must_use]
    pub fn with_usernames<I, S>(mut self, usernames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.usernames = usernames.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_styles(mut self, styles: StyleTable) -> Self {
        self.styles = styles;
        self
    }

    #[must_use]
    pub fn with_hit_bounds(mut self, bounds: HitBounds) -> Self {
        self.hit_bounds = bounds;
        self
    }
}

/// Text annotated with social entity occurrences and styles.
///
/// Offsets are byte offsets into the text unless a method says otherwise.
///
/// # Examples
///
/// ```
/// use social_text::{AnnotatedText, EntityKind, EntityKinds};
///
/// let mut text = AnnotatedText::with_text("Hello @bob, check #swift");
/// assert_eq!(text.occurrences(EntityKind::Mention)[0].text, "@bob");
///
/// let hit = text.occurrence_at(8).unwrap();
/// assert_eq!(hit.kind, EntityKind::Mention);
///
/// text.set_enabled_kinds(EntityKinds::empty());
/// assert!(text.occurrence_at(8).is_none());
/// ```
#[derive(Clone)]
pub struct AnnotatedText {
    rope: RopeWrapper,
    enabled: EntityKinds,
    scanner: EntityScanner,
    styles: StyleTable,
    hit_bounds: HitBounds,
    fixup: Option<Arc<dyn GlyphFixup>>,
    index: OccurrenceIndex,
    segments: Vec<StyledSegment>,
    revision: u64,
}

impl AnnotatedText {
    /// Create empty text with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(
            RopeWrapper::new(),
            EntityScanner::default(),
            AnnotatorOptions::default(),
        )
    }

    /// Create annotated text with default options.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self::from_parts(
            RopeWrapper::from(text),
            EntityScanner::default(),
            AnnotatorOptions::default(),
        )
    }

    /// Create empty text with the given options.
    ///
    /// Fails when a username cannot be compiled.
    pub fn with_options(options: AnnotatorOptions) -> Result<Self> {
        let scanner = EntityScanner::new(&options.usernames)?;
        Ok(Self::from_parts(RopeWrapper::new(), scanner, options))
    }

    fn from_parts(rope: RopeWrapper, scanner: EntityScanner, options: AnnotatorOptions) -> Self {
        let mut annotated = Self {
            rope,
            enabled: options.enabled_kinds,
            scanner,
            styles: options.styles,
            hit_bounds: options.hit_bounds,
            fixup: None,
            index: OccurrenceIndex::new(),
            segments: Vec::new(),
            revision: 0,
        };
        annotated.rederive();
        annotated
    }

    // ------------------------------------------------------------------
    // Content
    // ------------------------------------------------------------------

    /// Replace the text content.
    pub fn set_content(&mut self, text: &str) {
        self.rope.replace(text);
        self.rederive();
    }

    /// Replace the text content and the base style in one step.
    pub fn set_styled_content(&mut self, text: &str, base: Style) {
        self.rope.replace(text);
        self.styles.set_base(Some(base));
        self.rederive();
    }

    /// Insert text at a character position.
    pub fn insert(&mut self, char_idx: usize, text: &str) {
        self.rope.insert(char_idx, text);
        self.rederive();
    }

    /// Remove a range of characters.
    pub fn remove(&mut self, char_range: Range<usize>) {
        self.rope.remove(char_range);
        self.rederive();
    }

    /// Replace a range of characters with new text.
    pub fn replace_range(&mut self, char_range: Range<usize>, text: &str) {
        let start = char_range.start;
        self.rope.remove(char_range);
        self.rope.insert(start, text);
        self.rederive();
    }

    /// Clear all content.
    pub fn clear(&mut self) {
        self.rope.clear();
        self.rederive();
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Replace the set of enabled kinds.
    pub fn set_enabled_kinds(&mut self, kinds: EntityKinds) {
        self.enabled = kinds;
        self.rederive();
    }

    /// Enable a single kind.
    pub fn enable_kind(&mut self, kind: EntityKind) {
        self.set_enabled_kinds(self.enabled | kind.flag());
    }

    /// Disable a single kind.
    pub fn disable_kind(&mut self, kind: EntityKind) {
        self.set_enabled_kinds(self.enabled - kind.flag());
    }

    /// Replace the recognized usernames.
    ///
    /// The whole list is compiled before anything changes; on error the
    /// previous usernames and occurrences stay in place.
    pub fn set_usernames<I, S>(&mut self, usernames: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self.scanner.with_usernames(usernames) {
            Ok(scanner) => {
                self.scanner = scanner;
                self.rederive();
                Ok(())
            }
            Err(err) => {
                emit_log(LogLevel::Error, &format!("rejected username list: {err}"));
                Err(err)
            }
        }
    }

    /// Replace the style of one kind. Occurrences are kept; only styles
    /// are re-applied.
    pub fn set_style(&mut self, kind: EntityKind, style: Style) {
        self.styles.set_style(kind, style);
        self.restyle();
    }

    /// Replace the whole style table.
    pub fn set_styles(&mut self, styles: StyleTable) {
        self.styles = styles;
        self.restyle();
    }

    /// Set or clear the base style.
    pub fn set_base_style(&mut self, base: Option<Style>) {
        self.styles.set_base(base);
        self.restyle();
    }

    /// Set the upper-bound rule used by hit-testing.
    pub fn set_hit_bounds(&mut self, bounds: HitBounds) {
        self.hit_bounds = bounds;
    }

    /// Install or remove the rendering fixup pass.
    pub fn set_glyph_fixup(&mut self, fixup: Option<Arc<dyn GlyphFixup>>) {
        self.fixup = fixup;
        self.restyle();
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// The occurrence at a byte offset.
    ///
    /// Kinds are checked in the order Username, Mention, Hashtag, Url and
    /// the first hit wins.
    #[must_use]
    pub fn occurrence_at(&self, offset: usize) -> Option<&Occurrence> {
        self.index.occurrence_at(offset, self.hit_bounds)
    }

    /// The occurrence at a character index.
    #[must_use]
    pub fn occurrence_at_char(&self, char_idx: usize) -> Option<&Occurrence> {
        self.occurrence_at(self.rope.char_to_byte(char_idx))
    }

    /// The occurrence at a UTF-16 code unit index, as reported by platform
    /// text engines.
    #[must_use]
    pub fn occurrence_at_utf16(&self, utf16_idx: usize) -> Option<&Occurrence> {
        self.occurrence_at(self.rope.utf16_to_byte(utf16_idx))
    }

    /// Occurrences of one kind, in text order.
    #[must_use]
    pub fn occurrences(&self, kind: EntityKind) -> &[Occurrence] {
        self.index.get(kind)
    }

    /// The full occurrence index.
    #[must_use]
    pub fn index(&self) -> &OccurrenceIndex {
        &self.index
    }

    /// Byte range covering the whole text.
    #[must_use]
    pub fn full_range(&self) -> Range<usize> {
        0..self.rope.len_bytes()
    }

    /// Convert a byte range to UTF-16 code units.
    pub fn byte_range_to_utf16(&self, range: Range<usize>) -> Result<Range<usize>> {
        let len = self.rope.len_bytes();
        if range.end > len || range.start > range.end {
            return Err(Error::OffsetOutOfBounds {
                offset: range.end.max(range.start),
                len,
            });
        }
        Ok(self.rope.byte_to_utf16(range.start)..self.rope.byte_to_utf16(range.end))
    }

    /// Styled segments in application order.
    #[must_use]
    pub fn segments(&self) -> &[StyledSegment] {
        &self.segments
    }

    /// Resolved style at a byte offset.
    #[must_use]
    pub fn style_at(&self, offset: usize) -> Style {
        segment::resolve_style(&self.segments, offset)
    }

    /// Contiguous runs with resolved styles covering the whole text.
    #[must_use]
    pub fn runs(&self) -> Vec<StyledRun> {
        segment::flatten(&self.segments, self.rope.len_bytes())
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    #[must_use]
    pub fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    #[must_use]
    pub fn len_utf16(&self) -> usize {
        self.rope.len_utf16()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.is_empty()
    }

    #[must_use]
    pub fn enabled_kinds(&self) -> EntityKinds {
        self.enabled
    }

    #[must_use]
    pub fn usernames(&self) -> &[String] {
        self.scanner.usernames()
    }

    #[must_use]
    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    #[must_use]
    pub fn hit_bounds(&self) -> HitBounds {
        self.hit_bounds
    }

    /// Incremented on every re-derivation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ------------------------------------------------------------------
    // Re-derivation
    // ------------------------------------------------------------------

    fn rederive(&mut self) {
        let text = self.rope.to_string();
        let index = self.scanner.scan(&text, self.enabled);
        let segments = self.build_segments(&text, &index);
        self.index = index;
        self.segments = segments;
        self.bump_revision();
        emit_log_with(LogLevel::Debug, || {
            format!(
                "rescanned {} bytes: {} occurrences, {} segments (revision {})",
                text.len(),
                self.index.total(),
                self.segments.len(),
                self.revision
            )
        });
    }

    fn restyle(&mut self) {
        let text = self.rope.to_string();
        self.segments = self.build_segments(&text, &self.index);
        self.bump_revision();
    }

    fn build_segments(&self, text: &str, index: &OccurrenceIndex) -> Vec<StyledSegment> {
        let mut segments = Vec::with_capacity(index.total() + 1);
        let base = self.styles.base();
        if let Some(base) = base {
            if !text.is_empty() {
                segments.push(StyledSegment::new(0..text.len(), base, SegmentSource::Base));
            }
        }

        for kind in self.enabled.kinds() {
            let style = self.styles.style_for(kind);
            segments.extend(index.get(kind).iter().map(|occurrence| {
                StyledSegment::new(occurrence.range.clone(), style, SegmentSource::Entity(kind))
            }));
        }

        if let Some(fixup) = &self.fixup {
            segments.extend(fixup.fixup(text, base));
        }
        segments
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for AnnotatedText {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AnnotatedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnnotatedText")
            .field("len_bytes", &self.rope.len_bytes())
            .field("enabled", &self.enabled)
            .field("usernames", &self.scanner.usernames())
            .field("hit_bounds", &self.hit_bounds)
            .field("fixup", &self.fixup.as_ref().map(|fixup| fixup.name()))
            .field("occurrences", &self.index.total())
            .field("revision", &self.revision)
            .finish()
    }
}
