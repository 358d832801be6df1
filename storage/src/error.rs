//! Storage error types.
//!
//! Used by [`crate::TriggerStore`] and callers of storage APIs.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to access trigger file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Trigger file {} is not an object of trigger/response strings: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize triggers: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl StorageError {
    /// True for the recoverable "trigger does not exist" case; every other variant is a persistence failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }
}
