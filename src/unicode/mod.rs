//! Unicode utilities for grapheme handling and emoji detection.

mod grapheme;

pub use grapheme::{emoji_ranges, grapheme_indices, is_emoji_grapheme};
