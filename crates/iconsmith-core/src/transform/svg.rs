//! SVG markup parsing.
//!
//! Builds a minimal element tree with `quick-xml`. Comments, declarations,
//! doctypes and processing instructions are skipped; whitespace-only text
//! is dropped.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};

/// A node of the parsed SVG tree.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Element(Element),
    Text(String),
}

/// An XML element with its attributes in document order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    /// Namespace-prefixed elements such as `sodipodi:namedview`.
    pub fn is_namespaced(&self) -> bool {
        self.name.contains(':')
    }
}

/// Parse SVG markup into its root element.
///
/// # Errors
/// Returns [`Error::Transform`] for ill-formed XML, unclosed elements,
/// multiple roots, or a root that is not `<svg>`.
pub(crate) fn parse(markup: &str) -> Result<Element> {
    let mut reader = Reader::from_str(markup);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            Error::Transform(format!(
                "malformed SVG at byte {}: {}",
                reader.error_position(),
                e
            ))
        })?;

        match event {
            Event::Start(start) => stack.push(element_from(&start)?),
            Event::Empty(start) => {
                let element = element_from(&start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| Error::Transform("unexpected closing tag".to_string()))?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| Error::Transform(format!("invalid text content: {e}")))?;
                push_text(&mut stack, &text)?;
            }
            Event::CData(data) => {
                let text = String::from_utf8_lossy(&data).into_owned();
                push_text(&mut stack, &text)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(Error::Transform(format!(
            "unclosed <{}> element at end of input",
            open.name
        )));
    }

    let root = root.ok_or_else(|| Error::Transform("no root element".to_string()))?;
    if root.name != "svg" {
        return Err(Error::Transform(format!(
            "root element must be <svg>, found <{}>",
            root.name
        )));
    }

    Ok(root)
}

fn element_from(start: &BytesStart<'_>) -> Result<Element> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|e| Error::Transform(format!("invalid element name: {e}")))?
        .to_string();

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr =
            attr.map_err(|e| Error::Transform(format!("invalid attribute on <{name}>: {e}")))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| Error::Transform(format!("invalid attribute name on <{name}>: {e}")))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| Error::Transform(format!("invalid value for {key} on <{name}>: {e}")))?
            .into_owned();
        attributes.push((key, value));
    }

    Ok(Element {
        name,
        attributes,
        children: Vec::new(),
    })
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(Node::Element(element));
        return Ok(());
    }

    if root.is_some() {
        return Err(Error::Transform(format!(
            "multiple root elements (extra <{}>)",
            element.name
        )));
    }
    *root = Some(element);
    Ok(())
}

fn push_text(stack: &mut [Element], text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Ok(());
    }
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(Node::Text(text.to_string()));
            Ok(())
        }
        None => Err(Error::Transform("text outside of the root element".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_material_icon() {
        let root = parse(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"><path d="M0 0h24v24H0z" fill="none"/><path d="M10 20v-6h4v6h5v-8h3L12 3 2 12h3v8z"/></svg>"#,
        )
        .unwrap();

        assert_eq!(root.name, "svg");
        assert_eq!(root.attributes[3], ("viewBox".to_string(), "0 0 24 24".to_string()));
        assert_eq!(root.children.len(), 2);
    }

    #[test]
    fn test_skips_prolog_and_comments() {
        let root = parse(
            "<?xml version=\"1.0\"?>\n<!DOCTYPE svg>\n<!-- generator -->\n<svg><g><!-- inner --><circle r=\"1\"/></g></svg>",
        )
        .unwrap();

        let Node::Element(group) = &root.children[0] else {
            panic!("expected <g>");
        };
        assert_eq!(group.children.len(), 1);
    }

    #[test]
    fn test_unescapes_text_and_attributes() {
        let root = parse(r#"<svg><title>A &amp; B</title><path id="a&lt;b"/></svg>"#).unwrap();

        let Node::Element(title) = &root.children[0] else {
            panic!("expected <title>");
        };
        assert_eq!(title.children[0], Node::Text("A & B".to_string()));

        let Node::Element(path) = &root.children[1] else {
            panic!("expected <path>");
        };
        assert_eq!(path.attributes[0].1, "a<b");
    }

    #[test]
    fn test_keeps_spaces_around_nested_text() {
        let root = parse("<svg viewBox=\"0 0 24 24\">\n  <text>A <tspan>B</tspan> C</text>\n</svg>").unwrap();

        assert_eq!(root.children.len(), 1);
        let Node::Element(text) = &root.children[0] else {
            panic!("expected <text>");
        };
        assert_eq!(text.children.len(), 3);
        assert_eq!(text.children[0], Node::Text("A ".to_string()));
        assert_eq!(text.children[2], Node::Text(" C".to_string()));
    }

    #[test]
    fn test_unterminated_tag_fails() {
        assert!(parse(r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0"#).is_err());
    }

    #[test]
    fn test_unclosed_element_fails() {
        let err = parse("<svg><g><path/></g>").unwrap_err();
        assert!(err.to_string().contains("unclosed <svg>"));
    }

    #[test]
    fn test_mismatched_end_fails() {
        assert!(parse("<svg><g></svg>").is_err());
    }

    #[test]
    fn test_rejects_non_svg_root() {
        let err = parse("<html></html>").unwrap_err();
        assert!(err.to_string().contains("must be <svg>"));
    }

    #[test]
    fn test_rejects_multiple_roots() {
        assert!(parse("<svg/><svg/>").is_err());
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(parse("").is_err());
    }
}
