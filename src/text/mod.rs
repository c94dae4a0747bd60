//! Text content, styled segments and the annotation pipeline.
//!
//! Key types:
//!
//! - [`AnnotatedText`]: text plus its detected occurrences and styles
//! - [`StyledSegment`]: a style layered over a byte range
//! - [`StyledRun`]: a flattened run with one resolved style
//! - [`GlyphFixup`]: post-styling rendering pass, e.g. [`EmojiSizeFixup`]
//!
//! # Examples
//!
//! ```
//! use social_text::{AnnotatedText, Rgba, Style};
//!
//! let mut text = AnnotatedText::new();
//! text.set_styled_content("see #rust", Style::fg(Rgba::BLACK));
//!
//! let runs = text.runs();
//! assert_eq!(runs.len(), 2);
//! assert_eq!(runs[1].range, 4..9);
//! assert_eq!(runs[1].style.fg, Some(Rgba::GREEN));
//! ```

mod annotated;
mod fixup;
mod rope;
mod segment;

pub use annotated::{AnnotatedText, AnnotatorOptions};
pub use fixup::{EmojiSizeFixup, GlyphFixup};
pub use rope::RopeWrapper;
pub use segment::{SegmentSource, StyledRun, StyledSegment, flatten, resolve_style};
