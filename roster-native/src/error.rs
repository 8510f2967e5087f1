//! Error types for the native search routine.

use thiserror::Error;

/// Result type for native search operations.
pub type NativeResult<T> = Result<T, NativeError>;

/// Errors raised inside the native routine. They never cross the C
/// boundary as values; the exports turn them into a status code or a null
/// pointer plus a diagnostic string.
#[derive(Debug, Error)]
pub enum NativeError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A required pointer argument was null.
    #[error("null argument: {0}")]
    NullArgument(&'static str),

    /// A string argument was not valid UTF-8.
    #[error("invalid UTF-8 in {0}")]
    InvalidUtf8(&'static str),

    /// Rejected input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
