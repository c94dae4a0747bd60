//! Per-kind occurrence index with offset lookup.

use super::{EntityKind, Occurrence};

/// Upper-bound rule for hit-testing an occurrence range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HitBounds {
    /// `start <= offset < end`.
    #[default]
    Exclusive,
    /// `start <= offset <= end`: the offset just after a match also hits it.
    Inclusive,
}

/// Occurrences of a single kind, sorted by start offset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KindOccurrences {
    items: Vec<Occurrence>,
    max_len: usize,
}

impl KindOccurrences {
    /// Build from occurrences, stably sorting them by start offset.
    #[must_use]
    pub fn from_vec(mut items: Vec<Occurrence>) -> Self {
        items.sort_by_key(Occurrence::start);
        let max_len = items.iter().map(Occurrence::len).max().unwrap_or(0);
        Self { items, max_len }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Occurrence] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find the earliest-starting occurrence containing `offset`.
    ///
    /// Only occurrences starting within `max_len` before the offset can
    /// contain it, so the scan is bounded by two binary searches.
    #[must_use]
    pub fn find(&self, offset: usize, bounds: HitBounds) -> Option<&Occurrence> {
        let lowest_start = offset.saturating_sub(self.max_len);
        let lo = self.items.partition_point(|o| o.start() < lowest_start);
        let hi = self.items.partition_point(|o| o.start() <= offset);
        self.items
            .get(lo..hi)?
            .iter()
            .find(|o| o.contains(offset, bounds))
    }
}

/// Occurrences of every kind produced by one scan.
///
/// Disabled or unmatched kinds hold empty collections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OccurrenceIndex {
    kinds: [KindOccurrences; EntityKind::COUNT],
}

impl OccurrenceIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection for one kind.
    pub fn set(&mut self, kind: EntityKind, items: Vec<Occurrence>) {
        debug_assert!(items.iter().all(|o| o.kind == kind), "occurrence kind mismatch");
        self.kinds[kind.as_usize()] = KindOccurrences::from_vec(items);
    }

    /// Occurrences of `kind` in text order.
    #[must_use]
    pub fn get(&self, kind: EntityKind) -> &[Occurrence] {
        self.kinds[kind.as_usize()].as_slice()
    }

    /// Total number of occurrences across kinds.
    #[must_use]
    pub fn total(&self) -> usize {
        self.kinds.iter().map(KindOccurrences::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.iter().all(KindOccurrences::is_empty)
    }

    /// Clear every collection.
    pub fn clear(&mut self) {
        for kind in &mut self.kinds {
            *kind = KindOccurrences::default();
        }
    }

    /// Iterate all occurrences, kind by kind in detection order.
    pub fn iter(&self) -> impl Iterator<Item = &Occurrence> {
        self.kinds.iter().flat_map(KindOccurrences::as_slice)
    }

    /// Find the occurrence at `offset`, checking kinds in
    /// [`EntityKind::PRIORITY`] order.
    #[must_use]
    pub fn occurrence_at(&self, offset: usize, bounds: HitBounds) -> Option<&Occurrence> {
        EntityKind::PRIORITY
            .into_iter()
            .find_map(|kind| self.kinds[kind.as_usize()].find(offset, bounds))
    }
}
