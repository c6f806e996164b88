//! Serde adapter that writes a node's child map as a JSON array.
//!
//! Treemap/icicle renderers expect `children: [...]`, while the builder
//! keys children by name. Serializing emits the values in name order;
//! deserializing rebuilds the map and rejects repeated sibling names.
//!
//! Used as `#[serde(with = "crate::output::children")]`.

use crate::aggregator::node::Node;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use std::collections::BTreeMap;

pub fn serialize<S>(children: &BTreeMap<String, Node>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(children.values())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<String, Node>, D::Error>
where
    D: Deserializer<'de>,
{
    let nodes = Vec::<Node>::deserialize(deserializer)?;
    let mut children = BTreeMap::new();

    for node in nodes {
        let name = node.name.clone();
        if children.insert(name.clone(), node).is_some() {
            return Err(D::Error::custom(format!("duplicate child name {:?}", name)));
        }
    }

    Ok(children)
}
