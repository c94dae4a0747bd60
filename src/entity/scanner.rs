//! Entity scanner: one full pass per enabled kind.

use super::pattern::EntityPattern;
use super::{EntityKind, EntityKinds, Occurrence, OccurrenceIndex};
use crate::error::Result;

/// Compiled matchers for every entity kind.
///
/// A scanner is immutable once built. Changing the username list means
/// building a new scanner, so an invalid entry is reported before any scan
/// can use it.
#[derive(Clone, Debug)]
pub struct EntityScanner {
    mention: EntityPattern,
    hashtag: EntityPattern,
    url: EntityPattern,
    usernames: Vec<EntityPattern>,
    names: Vec<String>,
}

impl EntityScanner {
    /// Compile the built-in patterns plus one pattern per username.
    ///
    /// Entries are neither deduplicated nor escaped; a duplicate yields
    /// duplicate occurrences.
    pub fn new<I, S>(usernames: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (names, usernames) = compile_usernames(usernames)?;
        Ok(Self {
            mention: EntityPattern::mention()?,
            hashtag: EntityPattern::hashtag()?,
            url: EntityPattern::url()?,
            usernames,
            names,
        })
    }

    /// Build a scanner sharing this one's built-in patterns with a new
    /// username list.
    pub fn with_usernames<I, S>(&self, usernames: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (names, usernames) = compile_usernames(usernames)?;
        Ok(Self {
            mention: self.mention.clone(),
            hashtag: self.hashtag.clone(),
            url: self.url.clone(),
            usernames,
            names,
        })
    }

    /// The configured usernames, in configuration order.
    #[must_use]
    pub fn usernames(&self) -> &[String] {
        &self.names
    }

    /// Scan `text` for every kind in `kinds`.
    #[must_use]
    pub fn scan(&self, text: &str, kinds: EntityKinds) -> OccurrenceIndex {
        let mut index = OccurrenceIndex::new();
        for kind in kinds.kinds() {
            index.set(kind, self.scan_kind(text, kind));
        }
        index
    }

    /// Scan `text` for a single kind, in text order.
    ///
    /// Username occurrences from different entries are ordered by start,
    /// not by entry. When two entries overlap, hit-testing therefore picks
    /// the one starting first rather than the one listed first.
    #[must_use]
    pub fn scan_kind(&self, text: &str, kind: EntityKind) -> Vec<Occurrence> {
        let mut found = Vec::new();
        for pattern in self.patterns(kind) {
            found.extend(
                pattern
                    .find_ranges(text)
                    .map(|range| Occurrence::new(kind, range.clone(), &text[range])),
            );
        }
        // Several username patterns interleave; stable sort keeps list order on ties.
        if kind == EntityKind::Username && self.usernames.len() > 1 {
            found.sort_by_key(Occurrence::start);
        }
        found
    }

    fn patterns(&self, kind: EntityKind) -> &[EntityPattern] {
        match kind {
            EntityKind::Mention => std::slice::from_ref(&self.mention),
            EntityKind::Hashtag => std::slice::from_ref(&self.hashtag),
            EntityKind::Url => std::slice::from_ref(&self.url),
            EntityKind::Username => &self.usernames,
        }
    }
}

fn compile_usernames<I, S>(usernames: I) -> Result<(Vec<String>, Vec<EntityPattern>)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names: Vec<String> = usernames
        .into_iter()
        .map(|name| name.as_ref().to_string())
        .collect();
    let patterns = names
        .iter()
        .map(|name| EntityPattern::username(name))
        .collect::<Result<Vec<_>>>()?;
    Ok((names, patterns))
}

impl Default for EntityScanner {
    /// Scanner with the built-in patterns and no usernames.
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>()).expect("built-in entity patterns compile")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn texts(occurrences: &[Occurrence]) -> Vec<&str> {
        occurrences.iter().map(|o| o.text.as_str()).collect()
    }

    #[test]
    fn scan_all_kinds() {
        let scanner = EntityScanner::default();
        let index = scanner.scan("Hello @bob, check #swift at http://x.co", EntityKinds::all());

        assert_eq!(texts(index.get(EntityKind::Mention)), vec!["@bob"]);
        assert_eq!(texts(index.get(EntityKind::Hashtag)), vec!["#swift"]);
        assert_eq!(texts(index.get(EntityKind::Url)), vec!["http://x.co"]);
        assert!(index.get(EntityKind::Username).is_empty());
    }

    #[test]
    fn disabled_kinds_are_empty() {
        let scanner = EntityScanner::new(["bob"]).unwrap();
        let text = "@bob #tag";
        let index = scanner.scan(text, EntityKinds::HASHTAG);
        assert!(index.get(EntityKind::Mention).is_empty());
        assert!(index.get(EntityKind::Username).is_empty());
        assert_eq!(texts(index.get(EntityKind::Hashtag)), vec!["#tag"]);

        assert!(scanner.scan(text, EntityKinds::empty()).is_empty());
    }

    #[test]
    fn ranges_match_text() {
        let scanner = EntityScanner::new(["Nodes"]).unwrap();
        let text = "Ask @Nodes about #jobs at https://nodes.dk/jobs, Nodes!";
        let index = scanner.scan(text, EntityKinds::all());
        for occurrence in index.iter() {
            assert_eq!(&text[occurrence.range.clone()], occurrence.text);
        }
        assert_eq!(texts(index.get(EntityKind::Username)), vec!["Nodes", "Nodes"]);
    }

    #[test]
    fn multiple_usernames_merge_in_text_order() {
        let scanner = EntityScanner::new(["zed", "amy"]).unwrap();
        let text = "amy met zed and amy";
        let found = scanner.scan_kind(text, EntityKind::Username);
        assert_eq!(texts(&found), vec!["amy", "zed", "amy"]);
        assert!(found.windows(2).all(|w| w[0].start() <= w[1].start()));
    }

    #[test]
    fn overlapping_usernames_hit_earliest_start() {
        use crate::entity::HitBounds;

        let scanner = EntityScanner::new(["des", "Nodes"]).unwrap();
        let index = scanner.scan("Nodes", EntityKinds::USERNAME);
        assert_eq!(texts(index.get(EntityKind::Username)), vec!["Nodes", "des"]);
        let hit = index.occurrence_at(3, HitBounds::Exclusive).unwrap();
        assert_eq!(hit.text, "Nodes");
    }

    #[test]
    fn duplicate_usernames_duplicate_occurrences() {
        let scanner = EntityScanner::new(["amy", "amy"]).unwrap();
        let found = scanner.scan_kind("hi amy", EntityKind::Username);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0], found[1]);
    }

    #[test]
    fn invalid_username_fails_construction() {
        let err = EntityScanner::new(["ok", "(unclosed"]).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }));

        let scanner = EntityScanner::default();
        assert!(scanner.with_usernames(["[z-a]"]).is_err());
        assert!(scanner.usernames().is_empty());
    }

    #[test]
    fn with_usernames_replaces_list() {
        let scanner = EntityScanner::new(["a"]).unwrap();
        let next = scanner.with_usernames(["b", "c"]).unwrap();
        assert_eq!(next.usernames(), ["b".to_string(), "c".to_string()]);
        assert_eq!(scanner.usernames(), ["a".to_string()]);
    }

    #[test]
    fn username_kind_without_usernames_is_empty() {
        let scanner = EntityScanner::default();
        assert!(scanner.scan_kind("anything", EntityKind::Username).is_empty());
    }
}
