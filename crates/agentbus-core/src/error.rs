//! Error taxonomy for bus operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the storage layer and the bus facade
#[derive(Debug, Error)]
pub enum BusError {
    /// Storage root or its message directory missing
    #[error("Bus not initialized at {path} (run init first)")]
    Precondition { path: PathBuf },

    /// File I/O error
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize a record for writing
    #[error("JSON encode error for {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Cursor document exists but cannot be parsed
    #[error("Corrupt cursor document at {path}: {source}")]
    CorruptState {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Failed to acquire the cursor lock after multiple retries
    #[error("Failed to acquire lock on {path} after {retries} retries")]
    LockTimeout { path: PathBuf, retries: u32 },

    /// Author name rejected before any write
    #[error("Invalid author: {0}")]
    InvalidAuthor(String),

    /// Message content rejected before any write
    #[error("Invalid content: {0}")]
    InvalidContent(String),
}
