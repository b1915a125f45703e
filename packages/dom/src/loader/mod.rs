//! Loading localeSet XML into a document tree.

mod builder;
mod options;

use std::fs;
use std::path::Path;

pub use builder::DocumentBuilder;
pub use options::{LoadMode, LoadOptions, LoadOutcome, LoadWarning};

use crate::config::MAX_DOCUMENT_SIZE;
use crate::error::{DomError, Result};

/// Build a document from an XML string.
pub fn load_str(xml: &str, options: &LoadOptions) -> Result<LoadOutcome> {
    DocumentBuilder::new(options.clone()).build(xml)
}

/// Read and build a document from a file.
///
/// # Errors
/// `FileTooLarge` when the file exceeds [`MAX_DOCUMENT_SIZE`], `Io` when it
/// cannot be read, plus everything [`load_str`] returns.
pub fn load_file(path: &Path, options: &LoadOptions) -> Result<LoadOutcome> {
    let size = fs::metadata(path)?.len();
    if size > MAX_DOCUMENT_SIZE {
        return Err(DomError::FileTooLarge {
            size,
            limit: MAX_DOCUMENT_SIZE,
        });
    }

    tracing::debug!(path = %path.display(), size, "Loading localeSet file");
    let xml = fs::read_to_string(path)?;
    load_str(&xml, options)
}
