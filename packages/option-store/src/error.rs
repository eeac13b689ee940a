//! Error types for the option store.

use thiserror::Error;

/// Errors surfaced by [`OptionStore`](crate::OptionStore) operations.
///
/// Reads and removals through missing segments are not errors; they
/// resolve to `None` or do nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The path has no segment list, or cannot be walked.
    #[error("invalid path '{path}': {message}")]
    InvalidPath { path: String, message: String },

    /// A null value was offered for storage.
    #[error("invalid value at '{path}': null not allowed")]
    InvalidValue { path: String },
}

impl Error {
    pub(crate) fn invalid_path(path: impl ToString, message: impl Into<String>) -> Self {
        Error::InvalidPath {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures while encoding a single value as literal text.
///
/// These never leave the encoder through the lenient entry points: the
/// offending node is logged and downgraded instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// NaN or an infinity.
    #[error("non-finite number {0}")]
    NonFiniteNumber(String),

    /// A raw code marker with nothing in it.
    #[error("raw code is blank")]
    BlankRawCode,

    /// A mapping key with no characters.
    #[error("empty mapping key")]
    EmptyKey,
}
