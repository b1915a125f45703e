//! Output generation: XML round-trip and YAML dumps.

mod xml;
mod yaml;

pub use xml::to_xml;
pub use yaml::to_yaml;
