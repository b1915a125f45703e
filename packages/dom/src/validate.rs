//! Cardinality validation against property tables.
//!
//! Node construction and linking never look at property tables. This module
//! is the enforcement point: [`check_append`] is consulted by the loader
//! before each link, [`validate`] checks a finished tree.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{DomError, Result};
use crate::schema::{ElementKind, PropertyTable};
use crate::tree::{Document, NodeId};

/// Check whether `parent` can accept one more child of `child_kind`.
///
/// # Errors
/// `ChildNotAllowed` when the kind is absent from the parent's table,
/// `TooManyChildren` when the parent already holds `max_occurs` of them.
pub fn check_append(doc: &Document, parent: NodeId, child_kind: ElementKind) -> Result<()> {
    let node = doc
        .node(parent)
        .ok_or(DomError::NodeNotFound(parent.index()))?;

    let entry = node
        .property_table()
        .get(child_kind)
        .ok_or(DomError::ChildNotAllowed {
            parent: node.kind(),
            child: child_kind,
        })?;

    let count = doc.count_children(parent, child_kind);
    if !entry.admits_another(count) {
        return Err(DomError::TooManyChildren {
            parent: node.kind(),
            child: child_kind,
            max: entry.max_occurs,
        });
    }

    Ok(())
}

/// A single problem found by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// A child whose kind is not in the parent's table.
    ChildNotAllowed {
        node: NodeId,
        parent: ElementKind,
        child: ElementKind,
    },
    /// More children of a kind than `max_occurs`.
    TooMany {
        node: NodeId,
        parent: ElementKind,
        child: ElementKind,
        count: usize,
        max: u32,
    },
    /// Fewer children of a kind than `min_occurs`.
    TooFew {
        node: NodeId,
        parent: ElementKind,
        child: ElementKind,
        count: usize,
        min: u32,
    },
    /// Node constructed for a different packet than the document.
    PacketMismatch { node: NodeId, kind: ElementKind },
    /// Attribute not accepted by the node's kind.
    UnknownAttribute {
        node: NodeId,
        kind: ElementKind,
        attribute: String,
    },
    /// The document has no root.
    MissingRoot,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChildNotAllowed {
                node,
                parent,
                child,
            } => write!(f, "{node}: <{parent}> does not accept <{child}>"),
            Self::TooMany {
                node,
                parent,
                child,
                count,
                max,
            } => write!(
                f,
                "{node}: <{parent}> has {count} <{child}> children, at most {max} allowed"
            ),
            Self::TooFew {
                node,
                parent,
                child,
                count,
                min,
            } => write!(
                f,
                "{node}: <{parent}> has {count} <{child}> children, at least {min} required"
            ),
            Self::PacketMismatch { node, kind } => {
                write!(f, "{node}: <{kind}> belongs to a different packet")
            }
            Self::UnknownAttribute {
                node,
                kind,
                attribute,
            } => write!(f, "{node}: <{kind}> has unknown attribute '{attribute}'"),
            Self::MissingRoot => write!(f, "document has no root element"),
        }
    }
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Convert to a result, reporting the first issue.
    pub fn into_result(self) -> Result<()> {
        match self.issues.first() {
            None => Ok(()),
            Some(issue) => Err(DomError::Invalid(issue.to_string())),
        }
    }
}

/// Validate the whole tree below the document root.
#[must_use]
pub fn validate(doc: &Document) -> ValidationReport {
    let mut report = ValidationReport::default();

    let Some(root) = doc.root() else {
        report.issues.push(ValidationIssue::MissingRoot);
        return report;
    };

    for id in doc.descendants(root) {
        let Some(node) = doc.node(id) else {
            continue;
        };
        let kind = node.kind();

        if node.packet() != doc.packet() {
            report
                .issues
                .push(ValidationIssue::PacketMismatch { node: id, kind });
        }

        let spec = kind.spec();
        for (attribute, _) in node.attributes() {
            if !spec.accepts_attribute(attribute) {
                report.issues.push(ValidationIssue::UnknownAttribute {
                    node: id,
                    kind,
                    attribute: attribute.clone(),
                });
            }
        }

        let mut counts: BTreeMap<ElementKind, usize> = BTreeMap::new();
        for child in node.children() {
            if let Some(child_node) = doc.node(*child) {
                *counts.entry(child_node.kind()).or_default() += 1;
            }
        }

        report
            .issues
            .extend(cardinality_issues(id, kind, node.property_table(), &counts));
    }

    report
}

/// Compare per-kind child counts of one node against its table.
fn cardinality_issues(
    id: NodeId,
    kind: ElementKind,
    table: PropertyTable,
    counts: &BTreeMap<ElementKind, usize>,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for child_kind in counts.keys() {
        if !table.allows(*child_kind) {
            issues.push(ValidationIssue::ChildNotAllowed {
                node: id,
                parent: kind,
                child: *child_kind,
            });
        }
    }

    for entry in table.entries() {
        let count = counts.get(&entry.child_kind).copied().unwrap_or(0);
        if count < entry.min_occurs as usize {
            issues.push(ValidationIssue::TooFew {
                node: id,
                parent: kind,
                child: entry.child_kind,
                count,
                min: entry.min_occurs,
            });
        } else if !entry.within_bounds(count) {
            issues.push(ValidationIssue::TooMany {
                node: id,
                parent: kind,
                child: entry.child_kind,
                count,
                max: entry.max_occurs,
            });
        }
    }

    issues
}
