//! YAML dump of a document tree.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{DomError, Result};
use crate::schema::{ElementKind, PacketKind};
use crate::tree::{Document, NodeId};

/// Node representation for YAML serialization.
#[derive(Debug, Serialize)]
struct YamlNode {
    kind: ElementKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<YamlNode>,
}

#[derive(Debug, Serialize)]
struct YamlDocument {
    packet: PacketKind,
    root: YamlNode,
}

fn yaml_node(doc: &Document, id: NodeId) -> Option<YamlNode> {
    let node = doc.node(id)?;
    let attributes = node
        .attributes()
        .iter()
        .filter(|(key, _)| key != "name")
        .cloned()
        .collect();

    Some(YamlNode {
        kind: node.kind(),
        name: node.name().map(String::from),
        attributes,
        value: node.value().map(String::from),
        children: node
            .children()
            .iter()
            .filter_map(|child| yaml_node(doc, *child))
            .collect(),
    })
}

/// Dump the tree as YAML: one mapping per node with its kind, name,
/// remaining attributes, value and children.
///
/// # Errors
/// `MissingRoot` when the document has no root, `YamlSerialization` if
/// serialization fails.
pub fn to_yaml(doc: &Document) -> Result<String> {
    let root = doc
        .root()
        .and_then(|id| yaml_node(doc, id))
        .ok_or(DomError::MissingRoot(ElementKind::LocaleSet))?;

    let yaml = serde_yaml::to_string(&YamlDocument {
        packet: doc.packet(),
        root,
    })?;
    Ok(yaml)
}
