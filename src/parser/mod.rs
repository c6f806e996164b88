//! Input parsing and schema definitions.
//!
//! This module handles:
//! - Reading the gocloc report from stdin or a file
//! - Decoding it into per-file records

pub mod gocloc;
pub mod schema;

// Re-export main types
pub use gocloc::{parse_stats, read_stats, read_stats_file};
pub use schema::{FileEntry, SlocStats, StatsEntry};
