//! Rendering fixup hooks run after entity styling.
//!
//! Fixups are a rendering compatibility layer, not part of the entity
//! model: they only add styled segments and never touch occurrences.

use crate::style::Style;
use crate::text::segment::{SegmentSource, StyledSegment};
use crate::unicode::emoji_ranges;

/// Post-processing pass over the full text, run last during re-derivation.
pub trait GlyphFixup: Send + Sync {
    /// Human-readable name of this fixup.
    fn name(&self) -> &'static str;

    /// Produce segments layered over everything else.
    fn fixup(&self, text: &str, base: Option<Style>) -> Vec<StyledSegment>;
}

/// Shrinks color emoji so they line up with the surrounding text.
///
/// Emoji graphemes get `base.size * scale`, or `fallback_size` when the
/// base style sets no size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmojiSizeFixup {
    scale: f32,
    fallback_size: f32,
}

impl EmojiSizeFixup {
    pub const DEFAULT_SCALE: f32 = 0.8;
    pub const DEFAULT_FALLBACK_SIZE: f32 = 10.0;

    #[must_use]
    pub const fn new(scale: f32, fallback_size: f32) -> Self {
        Self {
            scale,
            fallback_size,
        }
    }

    /// Point size given to emoji under `base`.
    #[must_use]
    pub fn emoji_size(&self, base: Option<Style>) -> f32 {
        base.and_then(|style| style.size)
            .map_or(self.fallback_size, |size| size * self.scale)
    }
}

impl Default for EmojiSizeFixup {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SCALE, Self::DEFAULT_FALLBACK_SIZE)
    }
}

impl GlyphFixup for EmojiSizeFixup {
    fn name(&self) -> &'static str {
        "emoji-size"
    }

    fn fixup(&self, text: &str, base: Option<Style>) -> Vec<StyledSegment> {
        let style = Style::sized(self.emoji_size(base));
        emoji_ranges(text)
            .into_iter()
            .map(|range| StyledSegment::new(range, style, SegmentSource::Fixup))
            .collect()
    }
}
