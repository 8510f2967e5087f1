//! Error types for gateway construction.
//!
//! Searches themselves never return these; native and decode problems are
//! reported through [`crate::SearchOutcome`].

use thiserror::Error;

/// Result type for gateway setup.
pub type GatewayResult<T> = Result<T, GatewayError>;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Configuration value out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error reading a configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration file.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
