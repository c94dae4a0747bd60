//! `social_text` - Social entity annotation for plain text
//!
//! Detects @mentions, #hashtags, links and configured usernames in text,
//! assigns each a style, and answers "which entity is at this offset?"
//! for press handling. Rendering and point-to-offset mapping are left to
//! platform adapters.
//!
//! # Examples
//!
//! ```
//! use social_text::{AnnotatedText, AnnotatorOptions, EntityKind, EntityKinds};
//!
//! let options = AnnotatorOptions::default()
//!     .with_enabled_kinds(EntityKinds::all())
//!     .with_usernames(["Nodes"]);
//! let mut text = AnnotatedText::with_options(options)?;
//! text.set_content("@Nodes rocks, see http://x.co");
//!
//! assert_eq!(text.occurrence_at(0).map(|o| o.kind), Some(EntityKind::Mention));
//! assert_eq!(text.occurrence_at(2).map(|o| o.kind), Some(EntityKind::Username));
//! assert_eq!(text.occurrences(EntityKind::Url)[0].text, "http://x.co");
//! # Ok::<(), social_text::Error>(())
//! ```

// Crate-level lint configuration
#![allow(clippy::cast_possible_truncation)] // Intentional size casts
#![allow(clippy::cast_precision_loss)] // Intentional for color math
#![allow(clippy::module_name_repetitions)] // Allow EntityKind in entity etc
#![allow(clippy::missing_errors_doc)] // Error variants are documented on Error
#![allow(clippy::missing_panics_doc)] // Only the built-in patterns can panic
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::inherent_to_string)] // to_string methods are convenient
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod color;
pub mod entity;
pub mod error;
pub mod event;
pub mod interaction;
pub mod style;
pub mod text;
pub mod theme;
pub mod unicode;

// Re-export core types at crate root
pub use color::Rgba;
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use style::{Style, StyleBuilder, TextAttributes};

// Re-export entity types
pub use entity::{
    Boundary, EntityKind, EntityKinds, EntityPattern, EntityScanner, HitBounds, Occurrence,
    OccurrenceIndex,
};

// Re-export annotation types
pub use text::{
    AnnotatedText, AnnotatorOptions, EmojiSizeFixup, GlyphFixup, SegmentSource, StyledRun,
    StyledSegment,
};
pub use theme::StyleTable;

// Re-export interaction types
pub use interaction::{
    ClearToken, PressOutcome, PressPhase, PressTracker, ScheduledClear, TapHandlers,
};
