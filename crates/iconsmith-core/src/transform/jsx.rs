//! Conversion of the SVG tree into JSX and its printing.

use heck::{ToLowerCamelCase, ToUpperCamelCase};

use super::svg::{Element, Node};

/// A JSX attribute.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum JsxAttribute {
    /// `name="value"`
    Literal { name: String, value: String },

    /// `style={{ ... }}`
    Style(Vec<(String, String)>),

    /// `{...ident}`
    Spread(String),
}

impl JsxAttribute {
    fn name(&self) -> Option<&str> {
        match self {
            JsxAttribute::Literal { name, .. } => Some(name),
            JsxAttribute::Style(_) => Some("style"),
            JsxAttribute::Spread(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum JsxChild {
    Element(JsxElement),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct JsxElement {
    pub name: String,
    pub attributes: Vec<JsxAttribute>,
    pub children: Vec<JsxChild>,
}

impl JsxElement {
    /// Replace the attribute called `name` in place, or append it.
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        let attribute = JsxAttribute::Literal {
            name: name.to_string(),
            value: value.to_string(),
        };
        match self
            .attributes
            .iter_mut()
            .find(|existing| existing.name() == Some(name))
        {
            Some(existing) => *existing = attribute,
            None => self.attributes.push(attribute),
        }
    }

    pub fn push_spread(&mut self, ident: &str) {
        self.attributes.push(JsxAttribute::Spread(ident.to_string()));
    }
}

impl From<&Element> for JsxElement {
    fn from(element: &Element) -> Self {
        let attributes = element
            .attributes
            .iter()
            .map(|(name, value)| {
                if name == "style" {
                    JsxAttribute::Style(parse_style(value))
                } else {
                    JsxAttribute::Literal {
                        name: attribute_name(name),
                        value: value.clone(),
                    }
                }
            })
            .collect();

        let children = element
            .children
            .iter()
            .filter_map(|child| match child {
                Node::Element(el) if el.is_namespaced() => None,
                Node::Element(el) => Some(JsxChild::Element(JsxElement::from(el))),
                Node::Text(text) => Some(JsxChild::Text(text.clone())),
            })
            .collect();

        Self {
            name: element.name.clone(),
            attributes,
            children,
        }
    }
}

/// Map an SVG attribute name to its JSX property name.
pub(crate) fn attribute_name(name: &str) -> String {
    match name {
        "class" => return "className".to_string(),
        "for" => return "htmlFor".to_string(),
        _ => {}
    }
    if name.starts_with("data-") || name.starts_with("aria-") {
        return name.to_string();
    }
    if !name.contains(['-', ':']) {
        return name.to_string();
    }
    name.to_lower_camel_case()
}

/// Split an inline `style` attribute into camelCased declarations.
pub(crate) fn parse_style(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|declaration| {
            let (property, value) = declaration.split_once(':')?;
            let property = property.trim();
            let value = value.trim();
            if property.is_empty() || value.is_empty() {
                return None;
            }
            Some((style_property_name(property), value.to_string()))
        })
        .collect()
}

fn style_property_name(property: &str) -> String {
    if property.starts_with("--") {
        return property.to_string();
    }
    if let Some(rest) = property.strip_prefix("-ms-") {
        return format!("ms-{rest}").to_lower_camel_case();
    }
    if let Some(rest) = property.strip_prefix('-') {
        return rest.to_upper_camel_case();
    }
    property.to_lower_camel_case()
}

/// Print an element as indented JSX.
pub(crate) fn print(element: &JsxElement, depth: usize) -> String {
    let mut out = String::new();
    write_element(&mut out, element, depth);
    out
}

fn write_element(out: &mut String, element: &JsxElement, depth: usize) {
    let indent = "  ".repeat(depth);
    out.push_str(&indent);
    out.push('<');
    out.push_str(&element.name);
    for attribute in &element.attributes {
        out.push(' ');
        write_attribute(out, attribute);
    }

    if element.children.is_empty() {
        out.push_str(" />");
        return;
    }

    out.push('>');
    for child in &element.children {
        out.push('\n');
        match child {
            JsxChild::Element(el) => write_element(out, el, depth + 1),
            JsxChild::Text(text) => {
                out.push_str(&"  ".repeat(depth + 1));
                out.push('{');
                out.push_str(&js_string(text));
                out.push('}');
            }
        }
    }
    out.push('\n');
    out.push_str(&indent);
    out.push_str("</");
    out.push_str(&element.name);
    out.push('>');
}

fn write_attribute(out: &mut String, attribute: &JsxAttribute) {
    match attribute {
        JsxAttribute::Literal { name, value } => {
            out.push_str(name);
            out.push('=');
            if value.contains(['"', '&', '{', '}', '\n', '\r']) {
                out.push('{');
                out.push_str(&js_string(value));
                out.push('}');
            } else {
                out.push('"');
                out.push_str(value);
                out.push('"');
            }
        }
        JsxAttribute::Style(entries) => {
            out.push_str("style={{");
            for (i, (property, value)) in entries.iter().enumerate() {
                out.push_str(if i == 0 { " " } else { ", " });
                if is_identifier(property) {
                    out.push_str(property);
                } else {
                    out.push_str(&js_string(property));
                }
                out.push_str(": ");
                if is_plain_number(value) {
                    out.push_str(value);
                } else {
                    out.push_str(&js_string(value));
                }
            }
            out.push_str(if entries.is_empty() { "}}" } else { " }}" });
        }
        JsxAttribute::Spread(ident) => {
            out.push_str("{...");
            out.push_str(ident);
            out.push('}');
        }
    }
}

/// Double-quoted JavaScript string literal.
fn js_string(value: &str) -> String {
    // JSON string syntax is valid JavaScript.
    serde_json::Value::String(value.to_string()).to_string()
}

pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn is_plain_number(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(|c| c.is_ascii_digit() || c == '.')
        && value.parse::<f64>().is_ok()
}
