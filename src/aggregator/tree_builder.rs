//! Build the directory tree from per-file records.
//!
//! Each record adds its counts to the root and to every node on its path,
//! creating missing directories and the leaf in a single pass. The result
//! does not depend on record order.
//!
//! Example: "repo/src/main.go" with 10 code lines yields
//! root(10) -> repo(10) -> src(10) -> main.go(10, Go)

use super::metrics::LineCounts;
use super::node::Node;
use crate::parser::schema::FileEntry;
use crate::utils::config::PATH_SEPARATOR;
use crate::utils::error::TreeError;
use log::{debug, warn};

/// What to do with a record whose path is already a leaf
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Sum the counts into the existing leaf
    #[default]
    Accumulate,
    /// Fail the build with `TreeError::DuplicateRecord`
    Reject,
}

/// Tree builder configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Discard the first path segment (gocloc's project label)
    pub drop_root_segment: bool,

    pub duplicates: DuplicatePolicy,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_drop_root_segment(mut self, drop_root_segment: bool) -> Self {
        self.drop_root_segment = drop_root_segment;
        self
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }
}

/// Where a record's leaf lands in the current tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement<'a> {
    New,
    /// Existing leaf and the language it already carries
    Duplicate { language: &'a str },
}

/// Incremental tree builder
///
/// **Public** - use `build_tree` for the common one-shot case
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    root: Node,
    options: BuildOptions,
    seen: usize,
}

impl TreeBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self {
            root: Node::root(),
            options,
            seen: 0,
        }
    }

    /// Add one record to the tree
    ///
    /// The record is checked against the tree before anything is changed,
    /// so a rejected record leaves the tree as it was.
    ///
    /// # Errors
    /// * `TreeError::InvalidRecord` - empty path, or a path that conflicts
    ///   with an existing file or directory
    /// * `TreeError::DuplicateRecord` - path already counted under
    ///   `DuplicatePolicy::Reject`
    /// * `TreeError::CountOverflow` - adding the record would overflow a
    ///   line count
    pub fn insert(&mut self, entry: &FileEntry) -> Result<(), TreeError> {
        let index = self.seen;
        self.seen += 1;

        let segments = split_path(&entry.name, self.options.drop_root_segment)
            .map_err(|reason| invalid_record(index, entry, reason))?;

        let placement = locate(&self.root, &segments)
            .map_err(|reason| invalid_record(index, entry, reason))?;

        if let Placement::Duplicate { language } = placement {
            match self.options.duplicates {
                DuplicatePolicy::Reject => {
                    return Err(TreeError::DuplicateRecord {
                        index,
                        path: entry.name.clone(),
                    });
                }
                DuplicatePolicy::Accumulate if language != entry.language => {
                    warn!(
                        "Duplicate record {:?} ({}), adding to existing counts and keeping language {}",
                        entry.name, entry.language, language
                    );
                }
                DuplicatePolicy::Accumulate => {
                    warn!("Duplicate record {:?}, adding to existing counts", entry.name);
                }
            }
        }

        // The root bounds every node below it, so checking it covers the path
        let counts = LineCounts::from(entry);
        if self.root.counts().checked_add(counts).is_none() {
            return Err(TreeError::CountOverflow {
                index,
                path: entry.name.clone(),
            });
        }

        self.root.attach(&segments, counts, &entry.language);

        Ok(())
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn finish(self) -> Node {
        self.root
    }
}

/// Build a tree from all records
///
/// **Public** - main entry point for tree building
///
/// # Arguments
/// * `entries` - Per-file records in any order
/// * `options` - Root-segment and duplicate handling
///
/// # Returns
/// The root node, or the first record error (no partial tree)
pub fn build_tree(entries: &[FileEntry], options: &BuildOptions) -> Result<Node, TreeError> {
    debug!(
        "Building tree from {} records (drop root segment: {}, duplicates: {:?})",
        entries.len(),
        options.drop_root_segment,
        options.duplicates
    );

    let mut builder = TreeBuilder::new(options.clone());
    for entry in entries {
        builder.insert(entry)?;
    }

    let root = builder.finish();
    debug!("Built tree with {} top-level entries", root.children.len());

    Ok(root)
}

/// Split a record path into segments
///
/// Empty segments are kept as literal names. Fails if the path is empty or
/// nothing is left after dropping the root label.
pub fn split_path(path: &str, drop_root_segment: bool) -> Result<Vec<&str>, String> {
    if path.is_empty() {
        return Err("path is empty".to_string());
    }

    let mut segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();

    if drop_root_segment {
        segments.remove(0);
        if segments.is_empty() {
            return Err("path has no segments below the root label".to_string());
        }
    }

    Ok(segments)
}

/// Check where `segments` would land without modifying the tree
fn locate<'a>(root: &'a Node, segments: &[&str]) -> Result<Placement<'a>, String> {
    let Some((leaf, parents)) = segments.split_last() else {
        return Err("path has no segments".to_string());
    };

    let mut current = root;
    for (depth, segment) in parents.iter().enumerate() {
        match current.children.get(*segment) {
            None => return Ok(Placement::New),
            Some(child) if child.is_leaf() => {
                return Err(format!(
                    "{:?} is a file, not a directory",
                    segments[..=depth].join(PATH_SEPARATOR)
                ));
            }
            Some(child) => current = child,
        }
    }

    match current.children.get(*leaf) {
        None => Ok(Placement::New),
        Some(child) => match &child.language {
            Some(language) => Ok(Placement::Duplicate { language }),
            None => Err("path names an existing directory".to_string()),
        },
    }
}

fn invalid_record(index: usize, entry: &FileEntry, reason: String) -> TreeError {
    TreeError::InvalidRecord {
        index,
        path: entry.name.clone(),
        reason,
    }
}
