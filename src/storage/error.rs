//! Storage error types
//!
//! Defines all errors that can occur in the key-value storage layer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the key-value store
#[derive(Error, Debug)]
pub enum StorageError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The storage document exists but is not a key/value map
    #[error("Corrupt storage file {path:?}: {reason}")]
    Corruption { path: PathBuf, reason: String },
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
