//! Options and outcome types for document loading.

use std::fmt;

use crate::config::DEFAULT_MAX_DEPTH;
use crate::schema::ElementKind;
use crate::tree::Document;

/// How the loader reacts to elements the schema does not accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Fail on the first unknown element or schema violation.
    Strict,
    /// Drop the offending subtree, log it and record a [`LoadWarning`].
    #[default]
    Lenient,
}

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub mode: LoadMode,
    /// Maximum element nesting depth; the root is depth 1.
    pub max_depth: usize,
}

impl LoadOptions {
    /// Lenient options with the default depth limit.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to strict mode.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.mode = LoadMode::Strict;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            mode: LoadMode::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// A subtree dropped in lenient mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    /// Tag name of the dropped element.
    pub element: String,
    /// Kind of the node it would have been attached to.
    pub parent: ElementKind,
    /// Reason for dropping it.
    pub message: String,
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dropped <{}> under <{}>: {}",
            self.element, self.parent, self.message
        )
    }
}

/// Result of a successful load.
#[derive(Debug)]
pub struct LoadOutcome {
    pub document: Document,
    pub warnings: Vec<LoadWarning>,
}
