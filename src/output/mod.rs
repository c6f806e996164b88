//! Output writers for the directory tree.
//!
//! This module handles:
//! - The array-shaped `children` encoding
//! - Writing the tree as JSON to stdout or a file

pub mod children;
pub mod json;

// Re-export main functions
pub use json::{read_tree, write_tree, write_tree_file};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
