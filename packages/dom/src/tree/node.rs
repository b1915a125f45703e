//! Tree nodes.

use std::fmt;

use crate::schema::{ElementKind, ElementSpec, ObjectCategory, PacketKind, PropertyTable};

/// Index of a node inside its [`Document`](super::Document).
///
/// Ids are only meaningful for the document that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(super) usize);

impl NodeId {
    #[must_use]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Attachment state of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// Freshly constructed, no parent yet.
    Unattached,
    /// Linked under a parent.
    Attached,
}

/// A typed element in the document tree.
///
/// The parent edge is a plain [`NodeId`]; ownership runs from the document
/// arena through each parent's `children` list.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: ElementKind,
    packet: PacketKind,
    category: ObjectCategory,
    properties: PropertyTable,
    pub(super) parent: Option<NodeId>,
    pub(super) children: Vec<NodeId>,
    pub(super) attributes: Vec<(String, String)>,
    pub(super) value: Option<String>,
}

impl Node {
    pub(super) fn new(spec: &'static ElementSpec, packet: PacketKind) -> Self {
        Self {
            kind: spec.kind,
            packet,
            category: spec.category,
            properties: spec.properties,
            parent: None,
            children: Vec::new(),
            attributes: Vec::new(),
            value: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    #[must_use]
    pub fn packet(&self) -> PacketKind {
        self.packet
    }

    #[must_use]
    pub fn category(&self) -> ObjectCategory {
        self.category
    }

    /// The static property table this node was constructed with.
    #[must_use]
    pub fn property_table(&self) -> PropertyTable {
        self.properties
    }

    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[must_use]
    pub fn state(&self) -> NodeState {
        if self.parent.is_some() {
            NodeState::Attached
        } else {
            NodeState::Unattached
        }
    }

    /// Attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Attributes in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Shorthand for the `name` attribute.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.attribute("name")
    }

    /// Text content of a content node.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub(super) fn set_attribute(&mut self, name: &str, value: String) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }
}
