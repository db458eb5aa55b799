//! Error Types
//!
//! Failures the list core can observe. None of them are fatal: the
//! controller degrades to an empty or stale table and reports a message.

use thiserror::Error;

/// Remote load failures.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: status {status}")]
    Status { status: u16 },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status { status: status.as_u16() },
            None => FetchError::Transport(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

/// Snapshot persistence failures.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Snapshot storage unavailable: {0}")]
    Unavailable(String),

    #[error("Snapshot encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;
pub type SnapshotResult<T> = std::result::Result<T, SnapshotError>;
