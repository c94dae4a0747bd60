//! Social entity kinds, occurrences and detection.
//!
//! Key types:
//!
//! - [`EntityKind`]: the closed set of recognized entities
//! - [`EntityKinds`]: bitflag set of kinds enabled for scanning
//! - [`Occurrence`]: one detected entity span
//! - [`EntityScanner`]: compiled patterns producing an [`OccurrenceIndex`]
//!
//! # Examples
//!
//! ```
//! use social_text::entity::{EntityKind, EntityKinds, EntityScanner};
//!
//! let scanner = EntityScanner::new(["Nodes"]).unwrap();
//! let index = scanner.scan("@Nodes loves #rust", EntityKinds::all());
//!
//! assert_eq!(index.get(EntityKind::Mention)[0].text, "@Nodes");
//! assert_eq!(index.get(EntityKind::Username)[0].text, "Nodes");
//! assert_eq!(index.get(EntityKind::Hashtag)[0].text, "#rust");
//! ```

mod index;
mod pattern;
mod scanner;

pub use index::{HitBounds, KindOccurrences, OccurrenceIndex};
pub use pattern::{Boundary, EntityPattern};
pub use scanner::EntityScanner;

use bitflags::bitflags;
use std::fmt;
use std::ops::Range;

/// Social entity categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    /// `@name` at the start of text or after whitespace.
    Mention,
    /// `#tag` anywhere.
    Hashtag,
    /// `http://` or `https://` link.
    Url,
    /// A configured username, with or without a leading `@`.
    Username,
}

impl EntityKind {
    /// Number of kinds.
    pub const COUNT: usize = 4;

    /// All kinds in detection order.
    pub const ALL: [Self; Self::COUNT] = [Self::Mention, Self::Hashtag, Self::Url, Self::Username];

    /// All kinds in hit-test priority order (first wins).
    pub const PRIORITY: [Self; Self::COUNT] =
        [Self::Username, Self::Mention, Self::Hashtag, Self::Url];

    /// Dense index for per-kind tables.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self as usize
    }

    /// The flag for this kind in an [`EntityKinds`] set.
    #[must_use]
    pub const fn flag(self) -> EntityKinds {
        match self {
            Self::Mention => EntityKinds::MENTION,
            Self::Hashtag => EntityKinds::HASHTAG,
            Self::Url => EntityKinds::URL,
            Self::Username => EntityKinds::USERNAME,
        }
    }

    /// Lowercase name, used in events and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mention => "mention",
            Self::Hashtag => "hashtag",
            Self::Url => "url",
            Self::Username => "username",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Set of entity kinds enabled for scanning and styling.
    #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
    pub struct EntityKinds: u8 {
        const MENTION  = 1 << 0;
        const HASHTAG  = 1 << 1;
        const URL      = 1 << 2;
        const USERNAME = 1 << 3;
    }
}

impl EntityKinds {
    /// Check whether a kind is in the set.
    #[must_use]
    pub const fn has(self, kind: EntityKind) -> bool {
        self.contains(kind.flag())
    }

    /// Iterate the kinds in the set, in detection order.
    pub fn kinds(self) -> impl Iterator<Item = EntityKind> {
        EntityKind::ALL.into_iter().filter(move |kind| self.has(*kind))
    }
}

impl Default for EntityKinds {
    /// Mentions, hashtags and links. Usernames are opt-in.
    fn default() -> Self {
        Self::MENTION | Self::HASHTAG | Self::URL
    }
}

impl From<EntityKind> for EntityKinds {
    fn from(kind: EntityKind) -> Self {
        kind.flag()
    }
}

impl FromIterator<EntityKind> for EntityKinds {
    fn from_iter<I: IntoIterator<Item = EntityKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, kind| set | kind.flag())
    }
}

/// A detected entity span.
///
/// `range` is a byte range into the scanned text and `text` is exactly
/// the substring it covers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Occurrence {
    pub kind: EntityKind,
    pub range: Range<usize>,
    pub text: String,
}

impl Occurrence {
    #[must_use]
    pub fn new(kind: EntityKind, range: Range<usize>, text: impl Into<String>) -> Self {
        debug_assert!(range.start <= range.end, "occurrence range must be start <= end");
        Self {
            kind,
            range,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn start(&self) -> usize {
        self.range.start
    }

    #[must_use]
    pub fn end(&self) -> usize {
        self.range.end
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.range.end.saturating_sub(self.range.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether `offset` falls inside this occurrence.
    #[must_use]
    pub fn contains(&self, offset: usize, bounds: HitBounds) -> bool {
        match bounds {
            HitBounds::Exclusive => self.range.contains(&offset),
            HitBounds::Inclusive => offset >= self.range.start && offset <= self.range.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tables_are_consistent() {
        for (idx, kind) in EntityKind::ALL.into_iter().enumerate() {
            assert_eq!(kind.as_usize(), idx);
        }
        let mut priority = EntityKind::PRIORITY;
        priority.sort();
        assert_eq!(priority, EntityKind::ALL);
        assert_eq!(EntityKind::PRIORITY[0], EntityKind::Username);
    }

    #[test]
    fn kinds_set_operations() {
        let default = EntityKinds::default();
        assert!(default.has(EntityKind::Mention));
        assert!(default.has(EntityKind::Url));
        assert!(!default.has(EntityKind::Username));

        let set: EntityKinds = [EntityKind::Username, EntityKind::Hashtag]
            .into_iter()
            .collect();
        assert_eq!(
            set.kinds().collect::<Vec<_>>(),
            vec![EntityKind::Hashtag, EntityKind::Username]
        );
        assert_eq!(EntityKinds::empty().kinds().count(), 0);
        assert_eq!(EntityKinds::from(EntityKind::Url), EntityKinds::URL);
    }

    #[test]
    fn occurrence_accessors() {
        let occurrence = Occurrence::new(EntityKind::Hashtag, 3..9, "#swift");
        assert_eq!(occurrence.start(), 3);
        assert_eq!(occurrence.end(), 9);
        assert_eq!(occurrence.len(), 6);
        assert!(!occurrence.is_empty());
    }

    #[test]
    fn occurrence_contains_bounds() {
        let occurrence = Occurrence::new(EntityKind::Mention, 2..6, "@bob");
        assert!(!occurrence.contains(1, HitBounds::Exclusive));
        assert!(occurrence.contains(2, HitBounds::Exclusive));
        assert!(occurrence.contains(5, HitBounds::Exclusive));
        assert!(!occurrence.contains(6, HitBounds::Exclusive));
        assert!(occurrence.contains(6, HitBounds::Inclusive));
        assert!(!occurrence.contains(7, HitBounds::Inclusive));
    }

    #[test]
    fn kind_display() {
        assert_eq!(EntityKind::Url.to_string(), "url");
        assert_eq!(EntityKind::Username.name(), "username");
    }
}
