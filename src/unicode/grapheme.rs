//! Grapheme cluster iteration and emoji detection.

use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

const EMOJI_PRESENTATION_SELECTOR: char = '\u{FE0F}';
const REGIONAL_INDICATORS: std::ops::RangeInclusive<char> = '\u{1F1E6}'..='\u{1F1FF}';

/// Iterate over grapheme clusters with byte indices.
pub fn grapheme_indices(s: &str) -> impl Iterator<Item = (usize, &str)> {
    s.grapheme_indices(true)
}

/// Check whether a grapheme cluster renders as a color emoji glyph.
///
/// True for clusters carrying the emoji presentation selector, flag
/// pairs, and clusters led by a double-width pictograph.
#[must_use]
pub fn is_emoji_grapheme(grapheme: &str) -> bool {
    let Some(first) = grapheme.chars().next() else {
        return false;
    };
    if grapheme.contains(EMOJI_PRESENTATION_SELECTOR) {
        return true;
    }
    if REGIONAL_INDICATORS.contains(&first) {
        return grapheme.chars().filter(|c| REGIONAL_INDICATORS.contains(c)).count() == 2;
    }
    is_pictographic(first) && first.width() == Some(2)
}

fn is_pictographic(c: char) -> bool {
    matches!(
        u32::from(c),
        0x2300..=0x23FF | 0x2600..=0x27BF | 0x2B00..=0x2BFF | 0x1F000..=0x1FAFF
    )
}

/// Byte ranges of the emoji grapheme clusters in `s`, merged when adjacent.
#[must_use]
pub fn emoji_ranges(s: &str) -> Vec<Range<usize>> {
    if s.is_ascii() {
        return Vec::new();
    }
    let mut ranges: Vec<Range<usize>> = Vec::new();
    for (offset, grapheme) in grapheme_indices(s) {
        if !is_emoji_grapheme(grapheme) {
            continue;
        }
        let end = offset + grapheme.len();
        match ranges.last_mut() {
            Some(last) if last.end == offset => last.end = end,
            _ => ranges.push(offset..end),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graphemes_ascii() {
        let g: Vec<_> = grapheme_indices("hello").collect();
        assert_eq!(g, vec![(0, "h"), (1, "e"), (2, "l"), (3, "l"), (4, "o")]);
    }

    #[test]
    fn test_graphemes_emoji() {
        // Family emoji (ZWJ sequence)
        assert_eq!(grapheme_indices("👨‍👩‍👧").count(), 1);
    }

    #[test]
    fn test_graphemes_combining() {
        // e + combining acute accent
        assert_eq!(grapheme_indices("e\u{0301}").count(), 1);
    }

    #[test]
    fn test_is_emoji_grapheme() {
        assert!(is_emoji_grapheme("😀"));
        assert!(is_emoji_grapheme("👨‍👩‍👧"));
        assert!(is_emoji_grapheme("❤️"));
        assert!(is_emoji_grapheme("🇩🇰"));
        assert!(!is_emoji_grapheme("a"));
        assert!(!is_emoji_grapheme("é"));
        assert!(!is_emoji_grapheme("中"));
        assert!(!is_emoji_grapheme(""));
    }

    #[test]
    fn test_emoji_ranges_merge_adjacent() {
        let text = "hi 😀🎉 there 👍";
        let ranges = emoji_ranges(text);
        assert_eq!(ranges.len(), 2);
        assert_eq!(&text[ranges[0].clone()], "😀🎉");
        assert_eq!(&text[ranges[1].clone()], "👍");
        assert!(emoji_ranges("plain ascii").is_empty());
    }
}
