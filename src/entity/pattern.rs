//! Compiled entity patterns.
//!
//! The `regex` crate has no lookaround, so the context rules of the entity
//! grammar are expressed as a [`Boundary`] predicate checked against the
//! text before each candidate match. A rejected candidate resumes the
//! search one character after its start, which reports exactly the matches
//! a lookbehind assertion would.

use super::EntityKind;
use crate::error::{Error, Result};
use regex::Regex;
use std::ops::Range;

/// Mention body: `@` plus one or more name characters.
pub const MENTION_PATTERN: &str = r"@[a-zA-Z0-9._-]+";
/// Hashtag body: `#` plus one or more tag characters.
pub const HASHTAG_PATTERN: &str = r"#[a-zA-Z0-9._-]+";
/// Link: scheme, host run, then one or more dot/slash delimited segments.
pub const URL_PATTERN: &str = r"https?://[-\w]*(?:[./][-\w]*)+";
/// Prefix that suppresses a username match.
pub const USERNAME_EXCLUDED_PREFIX: &str = "=@";

/// Context rule evaluated at a candidate match start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    /// Any position.
    Anywhere,
    /// Start of text or directly after a whitespace character.
    StartOrWhitespace,
    /// Not directly after the given prefix.
    NotPrecededBy(&'static str),
}

impl Boundary {
    /// Check the rule for a match starting at byte `start` of `text`.
    #[must_use]
    pub fn accepts(self, text: &str, start: usize) -> bool {
        let before = &text[..start];
        match self {
            Self::Anywhere => true,
            Self::StartOrWhitespace => before.chars().next_back().is_none_or(char::is_whitespace),
            Self::NotPrecededBy(prefix) => !before.ends_with(prefix),
        }
    }
}

/// A compiled matcher for one entity kind.
#[derive(Clone, Debug)]
pub struct EntityPattern {
    kind: EntityKind,
    regex: Regex,
    boundary: Boundary,
}

impl EntityPattern {
    /// Compile a pattern. Fails with [`Error::InvalidPattern`] when `source`
    /// is not a valid regular expression.
    pub fn new(kind: EntityKind, source: &str, boundary: Boundary) -> Result<Self> {
        let regex = Regex::new(source).map_err(|source_err| Error::InvalidPattern {
            pattern: source.to_string(),
            source: source_err,
        })?;
        Ok(Self {
            kind,
            regex,
            boundary,
        })
    }

    pub fn mention() -> Result<Self> {
        Self::new(EntityKind::Mention, MENTION_PATTERN, Boundary::StartOrWhitespace)
    }

    pub fn hashtag() -> Result<Self> {
        Self::new(EntityKind::Hashtag, HASHTAG_PATTERN, Boundary::Anywhere)
    }

    pub fn url() -> Result<Self> {
        Self::new(EntityKind::Url, URL_PATTERN, Boundary::Anywhere)
    }

    /// Compile a username entry. The entry is used as a regular expression
    /// source, so plain names match literally.
    pub fn username(name: &str) -> Result<Self> {
        Self::new(
            EntityKind::Username,
            name,
            Boundary::NotPrecededBy(USERNAME_EXCLUDED_PREFIX),
        )
    }

    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// The regular expression source this pattern was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    #[must_use]
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Iterate non-overlapping, non-empty match ranges in text order.
    #[must_use]
    pub fn find_ranges<'p, 't>(&'p self, text: &'t str) -> MatchRanges<'p, 't> {
        MatchRanges {
            pattern: self,
            text,
            pos: 0,
        }
    }
}

/// Iterator over accepted match ranges of an [`EntityPattern`].
#[derive(Debug)]
pub struct MatchRanges<'p, 't> {
    pattern: &'p EntityPattern,
    text: &'t str,
    pos: usize,
}

impl MatchRanges<'_, '_> {
    fn step_past(&self, at: usize) -> usize {
        self.text[at..]
            .chars()
            .next()
            .map_or(self.text.len() + 1, |c| at + c.len_utf8())
    }
}

impl Iterator for MatchRanges<'_, '_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos <= self.text.len() {
            let found = self.pattern.regex.find_at(self.text, self.pos)?;
            if found.is_empty() {
                self.pos = self.step_past(found.end());
                continue;
            }
            if self.pattern.boundary.accepts(self.text, found.start()) {
                self.pos = found.end();
                return Some(found.range());
            }
            self.pos = self.step_past(found.start());
        }
        None
    }
}
