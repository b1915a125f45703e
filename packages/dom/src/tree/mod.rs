//! Document tree: an arena of typed nodes.
//!
//! A [`Document`] owns every node; parents own their children through index
//! lists and children point back with a plain [`NodeId`], so there are no
//! reference cycles.

mod document;
mod node;

pub use document::{Descendants, Document};
pub use node::{Node, NodeId, NodeState};
