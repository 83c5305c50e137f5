//! Interface declaration rendering.

use crate::interface::GeneratedInterface;
use otl_scaffold_schema::InterfaceDecl;

/// Renders a declaration tree as TypeScript interfaces.
pub struct InterfaceRenderer<'a> {
    interface: &'a GeneratedInterface,
}

impl<'a> InterfaceRenderer<'a> {
    /// Creates a new interface renderer.
    #[must_use]
    pub fn new(interface: &'a GeneratedInterface) -> Self {
        Self { interface }
    }

    /// Renders every declaration, separated by a blank line.
    #[must_use]
    pub fn render(&self) -> String {
        self.interface
            .declarations
            .iter()
            .map(render_declaration)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Renders a single interface declaration. Every property is optional.
#[must_use]
pub fn render_declaration(decl: &InterfaceDecl) -> String {
    let mut output = format!("interface {} {{\n", decl.name);

    for property in &decl.properties {
        if let Some(doc) = &property.doc {
            output.push_str(&format!("  /** {} */\n", doc));
        }
        output.push_str(&format!("  {}?: {};\n", property.name, property.ty));
    }

    output.push('}');
    output
}
