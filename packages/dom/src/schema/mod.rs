//! Element schema for the XFA document object model.
//!
//! Every element kind declares its permitted children as static metadata
//! (a [`PropertyTable`]) instead of hard-coding them in parsing logic. The
//! tables are compile-time constants shared by all nodes of a kind.

mod kind;
mod specs;
mod table;

pub use kind::{ElementKind, ObjectCategory, PacketKind};
pub use specs::{ElementSpec, COMMON_ATTRIBUTES};
pub use table::{PropertyEntry, PropertyTable};
