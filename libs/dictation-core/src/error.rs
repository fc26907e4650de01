//! Error types for dictation-core.

use thiserror::Error;

/// Result type alias using DictationError.
pub type Result<T> = std::result::Result<T, DictationError>;

/// Errors surfaced by the record store, snapshot codec and session controller.
#[derive(Debug, Error)]
pub enum DictationError {
    #[error("invalid snapshot: {0}")]
    Validation(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("session not ready: {0}")]
    NotReady(&'static str),

    #[error("session was invalidated by a reset")]
    Invalidated,
}
