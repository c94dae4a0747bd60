//! Styled segments and flattened runs handed to renderers.

use crate::entity::EntityKind;
use crate::style::Style;
use std::ops::Range;

/// What produced a styled segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentSource {
    /// Base style over the whole text.
    Base,
    /// Style of a detected entity.
    Entity(EntityKind),
    /// Rendering fixup pass.
    Fixup,
}

/// A byte range with a style layered over the text.
///
/// Segments are applied in order; a later segment overrides the
/// properties it sets.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledSegment {
    /// Byte range in the source text.
    pub range: Range<usize>,
    /// Style applied to this segment.
    pub style: Style,
    /// Layer that produced the segment.
    pub source: SegmentSource,
}

impl StyledSegment {
    /// Create a new styled segment.
    #[must_use]
    pub fn new(range: Range<usize>, style: Style, source: SegmentSource) -> Self {
        Self {
            range,
            style,
            source,
        }
    }

    /// Check if this segment overlaps with another.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.range.start < other.range.end && other.range.start < self.range.end
    }

    /// Check if this segment contains a position.
    #[must_use]
    pub fn contains(&self, pos: usize) -> bool {
        self.range.contains(&pos)
    }

    /// Get the length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.range.end.saturating_sub(self.range.start)
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.start >= self.range.end
    }
}

/// A maximal byte range with one resolved style.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledRun {
    pub range: Range<usize>,
    pub style: Style,
}

/// Resolve the style at `pos` by layering every segment containing it.
///
/// Base segments merge. Entity and fixup segments replace the attribute
/// set of everything beneath them.
#[must_use]
pub fn resolve_style(segments: &[StyledSegment], pos: usize) -> Style {
    segments
        .iter()
        .filter(|seg| seg.contains(pos))
        .fold(Style::NONE, |style, seg| match seg.source {
            SegmentSource::Base => style.merge(seg.style),
            SegmentSource::Entity(_) | SegmentSource::Fixup => style.overlay(seg.style),
        })
}

/// Flatten layered segments into contiguous runs covering `0..len`.
///
/// Adjacent ranges resolving to the same style are coalesced.
#[must_use]
pub fn flatten(segments: &[StyledSegment], len: usize) -> Vec<StyledRun> {
    if len == 0 {
        return Vec::new();
    }

    let mut bounds: Vec<usize> = segments
        .iter()
        .flat_map(|seg| [seg.range.start, seg.range.end])
        .filter(|&pos| pos < len)
        .collect();
    bounds.push(0);
    bounds.push(len);
    bounds.sort_unstable();
    bounds.dedup();

    let mut runs: Vec<StyledRun> = Vec::with_capacity(bounds.len());
    for pair in bounds.windows(2) {
        let style = resolve_style(segments, pair[0]);
        match runs.last_mut() {
            Some(last) if last.style == style => last.range.end = pair[1],
            _ => runs.push(StyledRun {
                range: pair[0]..pair[1],
                style,
            }),
        }
    }
    runs
}
