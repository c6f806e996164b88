//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while reading the gocloc report
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read input: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors that can occur while building the directory tree
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError {
    #[error("Invalid record #{index} ({path:?}): {reason}")]
    InvalidRecord {
        index: usize,
        path: String,
        reason: String,
    },

    #[error("Duplicate record #{index}: {path:?} was already counted")]
    DuplicateRecord { index: usize, path: String },

    #[error("Record #{index} ({path:?}): line count overflow")]
    CountOverflow { index: usize, path: String },
}

/// Errors that can occur during output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
