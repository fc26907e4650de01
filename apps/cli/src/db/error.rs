//! Database error types.

use dictation_core::DictationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<DbError> for DictationError {
    fn from(e: DbError) -> Self {
        DictationError::Storage(e.to_string())
    }
}
