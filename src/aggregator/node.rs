//! Tree node shared by the builder and the output writer.
//!
//! Children are keyed by segment name for lookup while building; the
//! serialized form flattens them into an array (see `output::children`).

use super::metrics::LineCounts;
use crate::utils::config::PATH_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A directory (aggregate) or source file (leaf) in the output tree
///
/// **Public** - produced by the tree builder, consumed by output writers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Single path segment, empty for the root
    pub name: String,

    pub code: u64,

    pub comment: u64,

    pub blank: u64,

    /// Language tag, set only on leaves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Child nodes keyed by segment name
    #[serde(
        default,
        skip_serializing_if = "BTreeMap::is_empty",
        with = "crate::output::children"
    )]
    pub children: BTreeMap<String, Node>,
}

impl Node {
    /// Create the synthetic root
    pub fn root() -> Self {
        Self::default()
    }

    /// Create an empty directory node
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create a file node with zero counts
    pub fn file(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: Some(language.into()),
            ..Self::default()
        }
    }

    /// A leaf carries a language; directories and the root never do
    pub fn is_leaf(&self) -> bool {
        self.language.is_some()
    }

    pub fn counts(&self) -> LineCounts {
        LineCounts::new(self.code, self.comment, self.blank)
    }

    /// Callers check for overflow against the root first (`TreeBuilder::insert`)
    pub(crate) fn add_counts(&mut self, counts: LineCounts) {
        self.code += counts.code;
        self.comment += counts.comment;
        self.blank += counts.blank;
    }

    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    /// Look up a descendant by slash-delimited path relative to this node
    pub fn find(&self, path: &str) -> Option<&Node> {
        path.split(PATH_SEPARATOR)
            .try_fold(self, |node, segment| node.children.get(segment))
    }

    /// Add `counts` here and along `segments`, creating missing nodes
    ///
    /// Every node on the way down accumulates the full counts. The last
    /// segment becomes a file carrying `language`; the rest are directories.
    pub(crate) fn attach(&mut self, segments: &[&str], counts: LineCounts, language: &str) {
        self.add_counts(counts);

        if let Some((head, tail)) = segments.split_first() {
            let child = self
                .children
                .entry(head.to_string())
                .or_insert_with(|| {
                    if tail.is_empty() {
                        Node::file(*head, language)
                    } else {
                        Node::directory(*head)
                    }
                });
            child.attach(tail, counts, language);
        }
    }
}
