//! Line-count arithmetic and whole-tree statistics.
//!
//! The summary is used for the `--summary` report and to cross-check the
//! built tree against the totals gocloc reports for itself.

use super::node::Node;
use crate::parser::schema::{FileEntry, StatsEntry};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::AddAssign;

/// Code/comment/blank line counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCounts {
    pub code: u64,
    pub comment: u64,
    pub blank: u64,
}

impl LineCounts {
    pub fn new(code: u64, comment: u64, blank: u64) -> Self {
        Self { code, comment, blank }
    }

    /// Field-wise sum, or `None` if any field overflows
    pub fn checked_add(self, other: Self) -> Option<Self> {
        Some(Self {
            code: self.code.checked_add(other.code)?,
            comment: self.comment.checked_add(other.comment)?,
            blank: self.blank.checked_add(other.blank)?,
        })
    }
}

impl AddAssign for LineCounts {
    fn add_assign(&mut self, other: Self) {
        self.code += other.code;
        self.comment += other.comment;
        self.blank += other.blank;
    }
}

impl From<&FileEntry> for LineCounts {
    fn from(entry: &FileEntry) -> Self {
        Self::new(entry.code, entry.comment, entry.blank)
    }
}

impl From<&StatsEntry> for LineCounts {
    fn from(total: &StatsEntry) -> Self {
        Self::new(total.code, total.comment, total.blank)
    }
}

/// Statistics over a whole tree
///
/// **Public** - returned from summarize
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeSummary {
    /// Number of leaves
    pub files: u64,

    /// Number of directories, excluding the root
    pub directories: u64,

    /// Deepest leaf, counting the root's children as depth 1
    pub max_depth: usize,

    /// Counts at the root
    pub counts: LineCounts,

    /// Counts per language tag, summed over leaves
    pub languages: BTreeMap<String, LineCounts>,
}

impl TreeSummary {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Files: {} | Directories: {} | Depth: {} | Code: {} | Comment: {} | Blank: {}",
            self.files,
            self.directories,
            self.max_depth,
            self.counts.code,
            self.counts.comment,
            self.counts.blank
        )
    }

    /// Render a per-language table, largest code count first
    pub fn format_report(&self) -> String {
        let mut languages: Vec<(&String, &LineCounts)> = self.languages.iter().collect();
        languages.sort_by(|a, b| b.1.code.cmp(&a.1.code).then_with(|| a.0.cmp(b.0)));

        let mut lines = Vec::new();
        lines.push(format!(
            "{:<24} {:>12} {:>12} {:>12}",
            "Language", "Code", "Comment", "Blank"
        ));
        lines.push("-".repeat(63));

        for (language, counts) in languages {
            let label = if language.is_empty() { "(unknown)" } else { language.as_str() };
            lines.push(format!(
                "{:<24} {:>12} {:>12} {:>12}",
                label, counts.code, counts.comment, counts.blank
            ));
        }

        lines.push("-".repeat(63));
        lines.push(format!(
            "{:<24} {:>12} {:>12} {:>12}",
            "Total", self.counts.code, self.counts.comment, self.counts.blank
        ));
        lines.push(format!(
            "{} files in {} directories (max depth {})",
            self.files, self.directories, self.max_depth
        ));

        lines.join("\n")
    }
}

/// Collect statistics over a built tree
///
/// **Public** - main entry point for metrics calculation
pub fn summarize(root: &Node) -> TreeSummary {
    let mut summary = TreeSummary {
        counts: root.counts(),
        ..TreeSummary::default()
    };

    for child in root.children.values() {
        visit(child, 1, &mut summary);
    }

    debug!("Tree summary: {}", summary.summary());

    summary
}

fn visit(node: &Node, depth: usize, summary: &mut TreeSummary) {
    match &node.language {
        Some(language) => {
            summary.files += 1;
            summary.max_depth = summary.max_depth.max(depth);
            *summary.languages.entry(language.clone()).or_default() += node.counts();
        }
        None => {
            summary.directories += 1;
            for child in node.children.values() {
                visit(child, depth + 1, summary);
            }
        }
    }
}

/// Difference between the built tree and the report's own totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalsMismatch {
    pub expected: LineCounts,
    pub actual: LineCounts,
    pub expected_files: u64,
    pub actual_files: u64,
}

impl TotalsMismatch {
    pub fn summary(&self) -> String {
        format!(
            "report total {}/{}/{} over {} files, tree has {}/{}/{} over {} files",
            self.expected.code,
            self.expected.comment,
            self.expected.blank,
            self.expected_files,
            self.actual.code,
            self.actual.comment,
            self.actual.blank,
            self.actual_files
        )
    }
}

/// Compare a built tree against the `Total` section of the report
///
/// Returns `None` when counts and file numbers agree.
pub fn check_totals(root: &Node, total: &StatsEntry) -> Option<TotalsMismatch> {
    let summary = summarize(root);
    let expected = LineCounts::from(total);

    if summary.counts == expected && summary.files == total.files {
        return None;
    }

    Some(TotalsMismatch {
        expected,
        actual: summary.counts,
        expected_files: total.files,
        actual_files: summary.files,
    })
}
