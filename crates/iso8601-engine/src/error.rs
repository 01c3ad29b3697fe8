//! Error types for iso8601-engine operations.

use thiserror::Error;

/// The classification of an [`Iso8601Error`], for callers that only need to
/// branch on the kind of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The text matched no recognized pattern or broke a style rule.
    Format,
    /// The text matched a pattern but a field is outside its domain.
    Range,
    /// The text is recognized but deliberately not implemented.
    Unsupported,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Iso8601Error {
    #[error("Invalid format: {0}")]
    Format(String),

    #[error("Out of range: {0}")]
    Range(String),

    #[error("Unsupported: {0}")]
    Unsupported(String),
}

impl Iso8601Error {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Iso8601Error::Format(_) => ErrorKind::Format,
            Iso8601Error::Range(_) => ErrorKind::Range,
            Iso8601Error::Unsupported(_) => ErrorKind::Unsupported,
        }
    }
}

pub type Result<T> = std::result::Result<T, Iso8601Error>;
