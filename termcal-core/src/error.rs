//! Error types for termcal.

use thiserror::Error;

/// Errors that can occur in termcal operations.
///
/// Out-of-range lookups, unknown-id removals and malformed persisted
/// records are not errors; those return empty or default values instead.
#[derive(Error, Debug)]
pub enum CalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias for termcal operations.
pub type CalResult<T> = Result<T, CalError>;
