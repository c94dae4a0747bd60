//! RGBA color type used by entity styles.
//!
//! Colors are plain values; the crate never blends or renders them. A
//! rendering adapter converts them into whatever its platform expects.
//!
//! # Examples
//!
//! ```
//! use social_text::Rgba;
//!
//! let teal = Rgba::rgb(0.0, 0.5, 0.5);
//! assert_eq!(teal.a, 1.0);
//! assert_ne!(teal, Rgba::BLUE);
//! ```

/// RGBA color with f32 components in range [0.0, 1.0].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Opaque red.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);

    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);

    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);

    /// Opaque purple (red + blue at half intensity).
    pub const PURPLE: Self = Self::rgb(0.5, 0.0, 0.5);

    /// Create an opaque color from f32 RGB components.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}
