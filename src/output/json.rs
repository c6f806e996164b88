//! JSON tree output writer.
//!
//! Writes the root Node either to a stream (stdout) or to a file.
//! Compact output is a single line followed by a newline.

use super::validate_path;
use crate::aggregator::node::Node;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a tree to any writer
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `tree` - Root node to write
/// * `writer` - Destination, usually stdout
/// * `pretty` - Indent the document
///
/// # Errors
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::WriteFailed` - I/O error during write
pub fn write_tree(tree: &Node, writer: impl Write, pretty: bool) -> Result<(), OutputError> {
    let mut writer = BufWriter::new(writer);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, tree)?;
    } else {
        serde_json::to_writer(&mut writer, tree)?;
    }

    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}

/// Write a tree to a JSON file
///
/// Parent directories are created when missing.
///
/// # Errors
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent
///   cannot be created
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
pub fn write_tree_file(
    tree: &Node,
    output_path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing tree to: {}", output_path.display());

    validate_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    write_tree(tree, file, pretty)?;

    info!(
        "Tree written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Read a tree back from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_tree(input_path: impl AsRef<Path>) -> Result<Node, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading tree from: {}", input_path.display());

    let file = File::open(input_path)?;
    let tree: Node = serde_json::from_reader(std::io::BufReader::new(file))?;

    debug!("Tree loaded: {} top-level entries", tree.children.len());

    Ok(tree)
}

fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
