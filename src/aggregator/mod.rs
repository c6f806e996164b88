//! Aggregation of per-file records into a directory tree.
//!
//! This module transforms parsed gocloc records into:
//! - A nested tree with summed counts at every directory
//! - Whole-tree statistics (files, depth, per-language totals)

pub mod metrics;
pub mod node;
pub mod tree_builder;

// Re-export main types and functions
pub use metrics::{check_totals, summarize, LineCounts, TotalsMismatch, TreeSummary};
pub use node::Node;
pub use tree_builder::{build_tree, split_path, BuildOptions, DuplicatePolicy, TreeBuilder};
