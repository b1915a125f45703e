//! Error types for the XFA document object model.
//!
//! `DomError` covers every failure surfaced by the library: schema lookups,
//! tree mutation, loading, validation and pattern rendering.

use thiserror::Error;

use crate::schema::{ElementKind, PacketKind};

/// Main error type for the library.
#[derive(Debug, Error)]
pub enum DomError {
    /// The sentinel kind cannot be instantiated.
    #[error("Cannot construct a node of kind <{0}>")]
    UnknownKind(ElementKind),

    /// Unknown XML element encountered while loading.
    #[error("Unknown element <{tag_name}>{}", .context.as_ref().map(|c| format!(" in {c}")).unwrap_or_default())]
    UnknownElement {
        tag_name: String,
        context: Option<String>,
    },

    /// The element kind is not valid in the requested packet.
    #[error("<{kind}> is not valid in the {packet} packet")]
    PacketMismatch { kind: ElementKind, packet: PacketKind },

    /// A node id does not belong to the document.
    #[error("Node {0} does not exist in this document")]
    NodeNotFound(usize),

    /// The node already has a parent.
    #[error("Node {0} is already attached to a parent")]
    AlreadyAttached(usize),

    /// Linking the node would make it its own ancestor.
    #[error("Appending node {child} under node {parent} would create a cycle")]
    CycleDetected { parent: usize, child: usize },

    /// The parent's property table does not list the child kind.
    #[error("<{parent}> does not accept <{child}> children")]
    ChildNotAllowed {
        parent: ElementKind,
        child: ElementKind,
    },

    /// The parent already holds the maximum number of children of a kind.
    #[error("<{parent}> accepts at most {max} <{child}> children")]
    TooManyChildren {
        parent: ElementKind,
        child: ElementKind,
        max: u32,
    },

    /// Element nesting is deeper than the configured limit.
    #[error("Element nesting exceeds maximum depth of {0}")]
    TooDeep(usize),

    /// Document failed validation.
    #[error("Validation failed: {0}")]
    Invalid(String),

    /// Invalid locale name format.
    #[error("Invalid locale name: '{0}'. Expected e.g. en_US or zh_Hans_CN")]
    InvalidLocaleName(String),

    /// The document has no root, or the root is not the expected element.
    #[error("Missing root element: expected <{0}>")]
    MissingRoot(ElementKind),

    /// Input file is larger than allowed.
    #[error("File is {size} bytes, limit is {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },

    /// Unsupported or malformed picture clause.
    #[error("Invalid date pattern '{pattern}': {reason}")]
    Pattern { pattern: String, reason: String },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml::Error),
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, DomError>;
