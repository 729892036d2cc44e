//! SVG to React component transformation.
//!
//! ```text
//! SVG markup ──► svg::parse ──► Element tree ──► JsxElement ──► component template
//!                                                   │
//!                                                   └── icon sizing, svg props, {...props}
//! ```

mod jsx;
mod svg;

use crate::error::{Error, Result};

/// Options for component generation.
#[derive(Debug, Clone)]
pub struct ComponentOptions {
    /// Replace the root `width`/`height` with `1em`.
    pub icon: bool,

    /// Emit a typed (TSX) component instead of plain JSX.
    pub typescript: bool,

    /// Attributes forced on the root `<svg>`, in order.
    pub svg_props: Vec<(String, String)>,

    /// Name of the default-exported component.
    pub component_name: String,
}

impl Default for ComponentOptions {
    fn default() -> Self {
        Self {
            icon: true,
            typescript: true,
            svg_props: vec![
                ("fill".to_string(), "currentColor".to_string()),
                ("stroke".to_string(), "transparent".to_string()),
            ],
            component_name: "Icon".to_string(),
        }
    }
}

/// Turns SVG markup into component source text.
///
/// The transformer is stateless; one instance can serve every pair.
#[derive(Debug, Clone, Default)]
pub struct ComponentTransformer {
    options: ComponentOptions,
}

impl ComponentTransformer {
    pub fn new(options: ComponentOptions) -> Self {
        Self { options }
    }

    /// Transform SVG markup into component source.
    ///
    /// # Errors
    /// Returns [`Error::Transform`] if the markup is not a well-formed SVG
    /// document or the component name is not a valid identifier.
    pub fn transform(&self, markup: &str) -> Result<String> {
        let name = &self.options.component_name;
        if !jsx::is_identifier(name) {
            return Err(Error::Transform(format!(
                "component name {name:?} is not a valid identifier"
            )));
        }

        let root = svg::parse(markup)?;
        let mut element = jsx::JsxElement::from(&root);

        if self.options.icon {
            element.set_attribute("width", "1em");
            element.set_attribute("height", "1em");
        }
        for (prop, value) in &self.options.svg_props {
            element.set_attribute(&jsx::attribute_name(prop), value);
        }
        element.push_spread("props");

        Ok(self.render(&jsx::print(&element, 1)))
    }

    fn render(&self, body: &str) -> String {
        let name = &self.options.component_name;
        if self.options.typescript {
            format!(
                "import * as React from \"react\";\n\
                 import type {{ SVGProps }} from \"react\";\n\
                 const {name} = (props: SVGProps<SVGSVGElement>): React.JSX.Element => (\n\
                 {body}\n\
                 );\n\
                 export default {name};\n"
            )
        } else {
            format!(
                "import * as React from \"react\";\n\
                 const {name} = (props) => (\n\
                 {body}\n\
                 );\n\
                 export default {name};\n"
            )
        }
    }
}
