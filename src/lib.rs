//! Sourcetree
//!
//! Turns the per-file line counts reported by gocloc into a nested
//! directory tree with code/comment/blank totals at every level, ready
//! for treemap and icicle renderers.
//!
//! ## Getting Started
//!
//! ```bash
//! gocloc --by-file --output-type=json . | buildtree > sourcetree.json
//! ```
//!
//! As a library:
//!
//! ```ignore
//! use sourcetree::aggregator::{build_tree, BuildOptions};
//! use sourcetree::parser::parse_stats;
//!
//! let stats = parse_stats(&report)?;
//! let tree = build_tree(&stats.files, &BuildOptions::default())?;
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
