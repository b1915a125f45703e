//! Document arena and node factory.

use super::node::{Node, NodeId, NodeState};
use crate::error::{DomError, Result};
use crate::schema::{ElementKind, PacketKind};

/// Owner of every node parsed from one packet.
///
/// Nodes live in an arena indexed by [`NodeId`]. Dropping the document
/// releases the whole tree.
#[derive(Debug, Clone)]
pub struct Document {
    packet: PacketKind,
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl Document {
    /// Create an empty document for a packet.
    #[must_use]
    pub fn new(packet: PacketKind) -> Self {
        Self {
            packet,
            nodes: Vec::new(),
            root: None,
        }
    }

    #[must_use]
    pub fn packet(&self) -> PacketKind {
        self.packet
    }

    /// Construct a node of `kind` within `packet`.
    ///
    /// The node is wired to the kind's static property table and object
    /// category, has no children and no parent. No schema check is made
    /// against other nodes; see [`crate::validate`].
    ///
    /// # Errors
    /// `UnknownKind` for the sentinel kind, `PacketMismatch` when the kind is
    /// not valid in `packet`.
    pub fn create_node(&mut self, kind: ElementKind, packet: PacketKind) -> Result<NodeId> {
        if kind.is_unknown() {
            return Err(DomError::UnknownKind(kind));
        }

        let spec = kind.spec();
        if !spec.valid_in(packet) {
            return Err(DomError::PacketMismatch { kind, packet });
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(spec, packet));
        Ok(id)
    }

    /// Make an unattached node the document root.
    pub fn set_root(&mut self, id: NodeId) -> Result<()> {
        if self.get(id)?.state() == NodeState::Attached {
            return Err(DomError::AlreadyAttached(id.0));
        }
        self.root = Some(id);
        Ok(())
    }

    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Number of nodes constructed in this document, attached or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Link `child` as the last child of `parent`.
    ///
    /// Only tree invariants are enforced here: the child must be unattached,
    /// must not be the root, and must not be an ancestor of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.get(parent)?;
        if self.get(child)?.state() == NodeState::Attached {
            return Err(DomError::AlreadyAttached(child.0));
        }
        if self.root == Some(child) {
            return Err(DomError::Invalid(format!(
                "root node {child} cannot be appended as a child"
            )));
        }
        if parent == child || self.ancestors(parent).any(|ancestor| ancestor == child) {
            return Err(DomError::CycleDetected {
                parent: parent.0,
                child: child.0,
            });
        }

        self.get_mut(child)?.parent = Some(parent);
        self.get_mut(parent)?.children.push(child);
        Ok(())
    }

    pub fn set_attribute(
        &mut self,
        id: NodeId,
        name: &str,
        value: impl Into<String>,
    ) -> Result<()> {
        self.get_mut(id)?.set_attribute(name, value.into());
        Ok(())
    }

    pub fn set_value(&mut self, id: NodeId, value: impl Into<String>) -> Result<()> {
        self.get_mut(id)?.value = Some(value.into());
        Ok(())
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::parent)
    }

    /// Children of a node; empty for unknown ids.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::children).unwrap_or_default()
    }

    /// Children of a node having the given kind, in document order.
    pub fn children_of_kind(
        &self,
        id: NodeId,
        kind: ElementKind,
    ) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(move |child| self.node(*child).map(Node::kind) == Some(kind))
    }

    #[must_use]
    pub fn first_child_of_kind(&self, id: NodeId, kind: ElementKind) -> Option<NodeId> {
        self.children_of_kind(id, kind).next()
    }

    /// Count of children of `kind` under `id`.
    #[must_use]
    pub fn count_children(&self, id: NodeId, kind: ElementKind) -> usize {
        self.children_of_kind(id, kind).count()
    }

    /// Strict ancestors of a node, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |current| self.parent(*current))
    }

    /// The node and all its descendants in pre-order.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let stack = if self.node(id).is_some() {
            vec![id]
        } else {
            Vec::new()
        };
        Descendants { doc: self, stack }
    }

    /// Depth of a node below its topmost ancestor (0 for unattached nodes).
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }

    fn get(&self, id: NodeId) -> Result<&Node> {
        self.nodes.get(id.0).ok_or(DomError::NodeNotFound(id.0))
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(id.0).ok_or(DomError::NodeNotFound(id.0))
    }
}

/// Pre-order iterator returned by [`Document::descendants`].
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.doc.children(id).iter().rev().copied());
        Some(id)
    }
}
