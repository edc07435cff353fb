//! Error types for the arbor virtual filesystem tree.

use std::path::PathBuf;
use thiserror::Error;

/// Structural errors from tree operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A segment that must already exist was missing during path resolution.
    /// `path` is the full path the operation was invoked with; `segment` is
    /// the first missing name along it.
    #[error("{path} does not exist: missing segment {segment}")]
    NotFound { path: String, segment: String },
}

/// Command-language errors from the line parser
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command. Available commands: CREATE, MOVE, DELETE, LIST")]
    Unknown,

    #[error("Malformed command. Usage: {usage}")]
    Malformed { usage: &'static str },
}

/// Storage and configuration errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed storage file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}
