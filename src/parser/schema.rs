//! Input JSON schema definitions for gocloc reports.
//!
//! Mirrors the document written by `gocloc --by-file --output-type=json`.
//! gocloc's consumers decode field names case-insensitively, so both the
//! capitalized and lowercase spellings are accepted here.

use serde::{Deserialize, Serialize};

/// Top-level gocloc report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlocStats {
    /// One entry per counted source file
    #[serde(rename = "Files", alias = "files")]
    pub files: Vec<FileEntry>,

    /// Report-wide totals (informational, never used to build the tree)
    #[serde(
        rename = "Total",
        alias = "total",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub total: Option<StatsEntry>,
}

/// Line counts for a single source file (a future leaf)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    #[serde(default)]
    pub code: u64,

    #[serde(default)]
    pub comment: u64,

    #[serde(default)]
    pub blank: u64,

    /// Slash-delimited path, e.g. "repo/src/main.go"
    pub name: String,

    /// Language tag assigned by gocloc
    #[serde(rename = "Lang", alias = "lang", alias = "language", default)]
    pub language: String,
}

impl FileEntry {
    /// Create a new file entry
    pub fn new(name: impl Into<String>, code: u64, comment: u64, blank: u64, language: impl Into<String>) -> Self {
        Self {
            code,
            comment,
            blank,
            name: name.into(),
            language: language.into(),
        }
    }
}

/// Totals reported by gocloc for the whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsEntry {
    #[serde(default)]
    pub files: u64,

    #[serde(default)]
    pub code: u64,

    #[serde(default)]
    pub comment: u64,

    #[serde(default)]
    pub blank: u64,
}
