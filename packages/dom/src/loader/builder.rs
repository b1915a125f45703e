//! Builder that turns a localeSet XML document into a [`Document`].

use roxmltree::Node as XmlNode;

use super::options::{LoadMode, LoadOptions, LoadOutcome, LoadWarning};
use crate::error::{DomError, Result};
use crate::schema::{ElementKind, PacketKind};
use crate::tree::{Document, NodeId};
use crate::validate::{check_append, validate};
use crate::xml::{element_children, get_attribute_name, get_raw_text, get_tag_name, get_text};

/// Walks a parsed XML tree and constructs nodes through the factory.
///
/// Each child is checked against its parent's property table before it is
/// linked. Unknown elements and schema violations either abort the build
/// (strict) or drop the subtree with a warning (lenient).
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    options: LoadOptions,
}

impl DocumentBuilder {
    #[must_use]
    pub fn new(options: LoadOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Parse `xml` and build its localeSet tree.
    ///
    /// # Errors
    /// `XmlParse` for malformed XML, `MissingRoot` when the root element is not
    /// `<localeSet>`, `TooDeep` when nesting exceeds the limit. In strict mode
    /// also the first unknown element or schema violation.
    pub fn build(&self, xml: &str) -> Result<LoadOutcome> {
        let input = roxmltree::Document::parse(xml)?;
        let root_element = input.root_element();

        if ElementKind::from_name(get_tag_name(root_element)) != ElementKind::LocaleSet {
            return Err(DomError::MissingRoot(ElementKind::LocaleSet));
        }
        if let Some(namespace) = root_element.tag_name().namespace() {
            if !namespace.starts_with(NAMESPACE_PREFIX) {
                tracing::warn!(%namespace, "Unexpected namespace on <localeSet>");
                if self.options.mode == LoadMode::Strict {
                    return Err(DomError::MissingRoot(ElementKind::LocaleSet));
                }
            }
        }

        let mut document = Document::new(PacketKind::LocaleSet);
        let root = document.create_node(ElementKind::LocaleSet, PacketKind::LocaleSet)?;
        document.set_root(root)?;
        copy_content(&mut document, root, root_element)?;

        let mut warnings = Vec::new();
        self.build_children(&mut document, root, root_element, 1, &mut warnings)?;

        if self.options.mode == LoadMode::Strict {
            validate(&document).into_result()?;
        }

        tracing::debug!(
            nodes = document.len(),
            warnings = warnings.len(),
            "Built localeSet document"
        );

        Ok(LoadOutcome { document, warnings })
    }

    fn build_children(
        &self,
        document: &mut Document,
        parent: NodeId,
        element: XmlNode<'_, '_>,
        depth: usize,
        warnings: &mut Vec<LoadWarning>,
    ) -> Result<()> {
        for child in element_children(element) {
            match self.build_child(document, parent, child, depth + 1, warnings) {
                Ok(()) => {}
                Err(err @ DomError::TooDeep(_)) => return Err(err),
                Err(err) if self.options.mode == LoadMode::Lenient => {
                    let parent_kind = document
                        .node(parent)
                        .map_or(ElementKind::Unknown, |node| node.kind());
                    tracing::warn!(
                        error = %err,
                        tag = %get_tag_name(child),
                        "Error building child element, skipping"
                    );
                    warnings.push(LoadWarning {
                        element: get_tag_name(child).to_string(),
                        parent: parent_kind,
                        message: err.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    fn build_child(
        &self,
        document: &mut Document,
        parent: NodeId,
        element: XmlNode<'_, '_>,
        depth: usize,
        warnings: &mut Vec<LoadWarning>,
    ) -> Result<()> {
        if depth > self.options.max_depth {
            return Err(DomError::TooDeep(self.options.max_depth));
        }

        let tag_name = get_tag_name(element);
        let kind = ElementKind::from_name(tag_name);
        if kind.is_unknown() {
            let context = document
                .node(parent)
                .map(|node| format!("<{}>", node.kind()));
            return Err(DomError::UnknownElement {
                tag_name: tag_name.to_string(),
                context,
            });
        }

        check_append(document, parent, kind)?;
        let id = document.create_node(kind, document.packet())?;
        copy_content(document, id, element)?;
        document.append_child(parent, id)?;

        self.build_children(document, id, element, depth, warnings)
    }
}

const NAMESPACE_PREFIX: &str = "http://www.xfa.org/schema/xfa-locale-set/";

/// Copy attributes, and text for content nodes, from the XML element.
///
/// A content value made only of whitespace is kept as is; it is the value
/// for symbols such as a space grouping separator.
fn copy_content(document: &mut Document, id: NodeId, element: XmlNode<'_, '_>) -> Result<()> {
    for attribute in element.attributes() {
        let Some(name) = get_attribute_name(&attribute) else {
            tracing::warn!(
                attribute = attribute.name(),
                namespace = attribute.namespace().unwrap_or_default(),
                tag = %get_tag_name(element),
                "Skipping namespaced attribute"
            );
            continue;
        };
        document.set_attribute(id, &name, attribute.value())?;
    }

    let holds_value = document
        .node(id)
        .is_some_and(|node| node.category().holds_value());
    if holds_value {
        if let Some(text) = get_text(element).or_else(|| get_raw_text(element)) {
            document.set_value(id, text)?;
        }
    }
    Ok(())
}
