//! Error types for social text annotation.

use std::fmt;

/// Result type alias for annotation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for annotation operations.
#[derive(Debug)]
pub enum Error {
    /// A username or entity pattern could not be compiled into a matcher.
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
    /// Offset lies past the end of the text.
    OffsetOutOfBounds { offset: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern { pattern, source } => {
                write!(f, "invalid entity pattern {pattern:?}: {source}")
            }
            Self::OffsetOutOfBounds { offset, len } => {
                write!(f, "offset {offset} out of bounds for text of length {len}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source),
            Self::OffsetOutOfBounds { .. } => None,
        }
    }
}
