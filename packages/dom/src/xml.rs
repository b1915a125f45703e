//! Helpers for reading `roxmltree` nodes and writing XML text.

use roxmltree::{Attribute, Node};

/// Namespace bound to the predefined `xml` prefix.
pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use xfa_dom::xml::get_tag_name;
///
/// let xml = r#"<localeSet><locale name="en_US"/></localeSet>"#;
/// let doc = Document::parse(xml).unwrap();
/// let locale = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(locale), "locale");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Get all element children of a node.
///
/// Skips text, comments and processing instructions.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Concatenated direct text of a node, untrimmed.
///
/// Text inside child elements is not included. Returns `None` when there is
/// no text at all.
pub fn get_raw_text(node: Node<'_, '_>) -> Option<String> {
    let text: String = node
        .children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect();
    (!text.is_empty()).then_some(text)
}

/// Direct text of a node with XML whitespace trimmed.
///
/// Only space, tab, CR and LF are trimmed, so a no-break space survives.
/// Returns `None` when nothing is left.
pub fn get_text(node: Node<'_, '_>) -> Option<String> {
    let text = get_raw_text(node)?;
    let trimmed = text.trim_matches(is_xml_whitespace);
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn is_xml_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Attribute name with its `xml:` prefix kept.
///
/// Returns `None` for attributes in any other namespace, since their prefix
/// cannot be written back without a declaration.
pub fn get_attribute_name(attribute: &Attribute<'_, '_>) -> Option<String> {
    match attribute.namespace() {
        None => Some(attribute.name().to_string()),
        Some(XML_NAMESPACE) => Some(format!("xml:{}", attribute.name())),
        Some(_) => None,
    }
}

/// Escape text for use in element content or a double-quoted attribute.
///
/// # Examples
/// ```
/// use xfa_dom::xml::escape;
///
/// assert_eq!(escape(r#"'at' <h> & "q""#), "'at' &lt;h&gt; &amp; &quot;q&quot;");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
