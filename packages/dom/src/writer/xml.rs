//! XML serialisation of a document tree.

use crate::error::{DomError, Result};
use crate::schema::ElementKind;
use crate::tree::{Document, NodeId};
use crate::xml::escape;

const INDENT: &str = "  ";

/// Serialise the document back to XML.
///
/// The root carries the packet namespace; attributes keep insertion order.
///
/// # Errors
/// `MissingRoot` when the document has no root.
pub fn to_xml(doc: &Document) -> Result<String> {
    let root = doc
        .root()
        .ok_or(DomError::MissingRoot(ElementKind::LocaleSet))?;

    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    write_node(doc, root, 0, true, &mut out);
    Ok(out)
}

fn write_node(doc: &Document, id: NodeId, depth: usize, is_root: bool, out: &mut String) {
    let Some(node) = doc.node(id) else {
        return;
    };

    let indent = INDENT.repeat(depth);
    out.push_str(&format!("{indent}<{}", node.kind().name()));
    if is_root {
        if let Some(namespace) = doc.packet().namespace() {
            out.push_str(&format!(" xmlns=\"{namespace}\""));
        }
    }
    for (name, value) in node.attributes() {
        out.push_str(&format!(" {name}=\"{}\"", escape(value)));
    }

    let children = node.children();
    match (node.value(), children.is_empty()) {
        (None, true) => out.push_str("/>\n"),
        (Some(value), true) => {
            out.push_str(&format!(">{}</{}>\n", escape(value), node.kind().name()));
        }
        (value, false) => {
            out.push_str(">\n");
            if let Some(value) = value {
                out.push_str(&format!("{indent}{INDENT}{}\n", escape(value)));
            }
            for child in children {
                write_node(doc, *child, depth + 1, false, out);
            }
            out.push_str(&format!("{indent}</{}>\n", node.kind().name()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{load_str, LoadOptions};
    use crate::schema::PacketKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_xml_layout() {
        let xml = r#"<localeSet xmlns="http://www.xfa.org/schema/xfa-locale-set/2.7/"><locale name="en_US" desc="English"><datePatterns><datePattern name="med">MMM D, YYYY</datePattern></datePatterns><timePatterns/></locale></localeSet>"#;
        let outcome = load_str(xml, &LoadOptions::default()).unwrap();

        let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<localeSet xmlns="http://www.xfa.org/schema/xfa-locale-set/2.7/">
  <locale name="en_US" desc="English">
    <datePatterns>
      <datePattern name="med">MMM D, YYYY</datePattern>
    </datePatterns>
    <timePatterns/>
  </locale>
</localeSet>
"#;
        assert_eq!(to_xml(&outcome.document).unwrap(), expected);
    }

    #[test]
    fn test_to_xml_escapes() {
        let xml = r#"<localeSet><locale name="a&amp;b"><numberSymbols><numberSymbol name="grouping">&lt;</numberSymbol></numberSymbols></locale></localeSet>"#;
        let outcome = load_str(xml, &LoadOptions::default()).unwrap();
        let out = to_xml(&outcome.document).unwrap();

        assert!(out.contains(r#"<locale name="a&amp;b">"#));
        assert!(out.contains(r#"<numberSymbol name="grouping">&lt;</numberSymbol>"#));
    }

    #[test]
    fn test_to_xml_reloads_to_equal_tree() {
        let xml = r#"<localeSet><locale name="en_US"><calendarSymbols name="gregorian"><eraNames><era>BC</era><era>AD</era></eraNames></calendarSymbols></locale></localeSet>"#;
        let first = load_str(xml, &LoadOptions::default()).unwrap().document;
        let second = load_str(&to_xml(&first).unwrap(), &LoadOptions::default())
            .unwrap()
            .document;

        assert_eq!(first.len(), second.len());
        let a: Vec<_> = first.descendants(first.root().unwrap()).collect();
        let b: Vec<_> = second.descendants(second.root().unwrap()).collect();
        for (x, y) in a.into_iter().zip(b) {
            assert_eq!(first.node(x), second.node(y));
        }
    }

    #[test]
    fn test_to_xml_without_root() {
        let doc = Document::new(PacketKind::LocaleSet);
        assert!(matches!(to_xml(&doc), Err(DomError::MissingRoot(_))));
    }
}
