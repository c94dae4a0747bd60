//! Style table mapping entity kinds to styles.

use crate::color::Rgba;
use crate::entity::EntityKind;
use crate::style::Style;

/// Point size used by the default entity styles.
pub const DEFAULT_POINT_SIZE: f32 = 12.0;

/// Styles applied to entity ranges, plus the optional base style laid
/// under the whole text before entity styles.
///
/// The mapping is total: every kind always has a style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleTable {
    styles: [Style; EntityKind::COUNT],
    base: Option<Style>,
}

impl StyleTable {
    /// A table with the same style for every kind and no base style.
    #[must_use]
    pub const fn uniform(style: Style) -> Self {
        Self {
            styles: [style; EntityKind::COUNT],
            base: None,
        }
    }

    /// Style for a kind.
    #[must_use]
    pub fn style_for(&self, kind: EntityKind) -> Style {
        self.styles[kind.as_usize()]
    }

    /// Set the style for a kind.
    pub fn set_style(&mut self, kind: EntityKind, style: Style) -> &mut Self {
        self.styles[kind.as_usize()] = style;
        self
    }

    /// Builder-style style setter.
    #[must_use]
    pub fn with_style(mut self, kind: EntityKind, style: Style) -> Self {
        self.set_style(kind, style);
        self
    }

    /// Base style laid under the whole text, if configured.
    #[must_use]
    pub const fn base(&self) -> Option<Style> {
        self.base
    }

    /// Set or clear the base style.
    pub fn set_base(&mut self, base: Option<Style>) -> &mut Self {
        self.base = base;
        self
    }

    /// Builder-style base style setter.
    #[must_use]
    pub fn with_base(mut self, base: Style) -> Self {
        self.base = Some(base);
        self
    }
}

impl Default for StyleTable {
    /// Red mentions, green hashtags, blue links, bold purple usernames.
    fn default() -> Self {
        let sized = Style::sized(DEFAULT_POINT_SIZE);
        Self::uniform(sized)
            .with_style(EntityKind::Mention, sized.with_fg(Rgba::RED))
            .with_style(EntityKind::Hashtag, sized.with_fg(Rgba::GREEN))
            .with_style(EntityKind::Url, sized.with_fg(Rgba::BLUE))
            .with_style(EntityKind::Username, sized.with_fg(Rgba::PURPLE).with_bold())
    }
}
