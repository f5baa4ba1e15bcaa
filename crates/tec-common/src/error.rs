//! Error types shared across the publisher workspace.

use thiserror::Error;

/// Result type alias using TecError.
pub type TecResult<T> = Result<T, TecError>;

/// Primary error type for publication operations.
#[derive(Debug, Error)]
pub enum TecError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Corrupt state document at {path}: {message}")]
    StateCorruption { path: String, message: String },
}
