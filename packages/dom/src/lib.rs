//! xfa-dom - Schema-driven document object model for XFA localeSet packets.
//!
//! Every XFA element kind declares, as static data, which child kinds it may
//! own and how many of each. Nodes are constructed through a factory that
//! binds them to their kind's table; a separate validator enforces the
//! cardinality bounds while documents are built from XML.
//!
//! # Example
//!
//! ```
//! use xfa_dom::schema::{ElementKind, PacketKind, PropertyEntry};
//! use xfa_dom::tree::Document;
//!
//! let mut doc = Document::new(PacketKind::LocaleSet);
//! let id = doc.create_node(ElementKind::DatePatterns, PacketKind::LocaleSet).unwrap();
//! let node = doc.node(id).unwrap();
//!
//! assert!(node.children().is_empty());
//! assert_eq!(
//!     node.property_table().raw(),
//!     &[
//!         PropertyEntry::new(ElementKind::DatePattern, 0, 4),
//!         PropertyEntry::SENTINEL,
//!     ]
//! );
//! ```
//!
//! # Architecture
//!
//! - [`schema`]: element kinds, packets, categories and property tables
//! - [`tree`]: document arena, nodes and the node factory
//! - [`validate`]: cardinality checks against property tables
//! - [`loader`]: XML to document builder
//! - [`writer`]: XML and YAML output
//! - [`locale`]: read-only locale queries
//! - [`pattern`]: date pattern rendering
//! - [`config`]: constants and input validation
//! - [`error`]: error type and Result alias
//! - [`cli`]: command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod locale;
pub mod pattern;
pub mod schema;
pub mod tree;
pub mod validate;
pub mod writer;
pub mod xml;

// Re-export commonly used items
pub use error::{DomError, Result};
pub use loader::{load_file, load_str, LoadMode, LoadOptions, LoadOutcome};
pub use schema::{ElementKind, ObjectCategory, PacketKind, PropertyEntry, PropertyTable};
pub use tree::{Document, Node, NodeId, NodeState};
