//! Error types for the ingestion crate.

use thiserror::Error;

/// Errors that can occur while talking to the remote snapshot source.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The remote directory or a snapshot file was unreachable (connection
    /// failure, timeout, or HTTP error status).
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to parse snapshot body: {0}")]
    SnapshotParse(#[from] serde_json::Error),
}

impl From<reqwest::Error> for IngestError {
    fn from(err: reqwest::Error) -> Self {
        IngestError::Transport(err.to_string())
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
