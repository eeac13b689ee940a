//! Error types for chart assembly.

use thiserror::Error;

/// Errors that can occur while configuring or rendering a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// An option store operation failed.
    #[error("store error: {0}")]
    Store(#[from] chartopts_option_store::Error),

    /// A catalog option was offered to a section it does not belong to.
    #[error("option {option} is not assignable to section {section}")]
    WrongSection { option: String, section: String },

    /// A catalog option received a value of the wrong kind.
    #[error("option {option} expects a {expected} value, got {found}")]
    KindMismatch {
        option: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A null value was offered for a catalog option.
    #[error("option {option}: null not allowed")]
    InvalidValue { option: String },

    /// The chart configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// An I/O error occurred.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for chart operations.
pub type Result<T> = std::result::Result<T, ChartError>;
