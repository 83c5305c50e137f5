//! Interface declaration synthesis.
//!
//! Builds the declaration tree for a root config interface. Group fields
//! with children become nested declarations named after their parent; the
//! tree is rendered to TypeScript separately.

use crate::imports::TypeImportSet;
use crate::resolver::{Resolution, resolve_field_type};
use otl_scaffold_schema::{
    FieldDescriptor, InterfaceDecl, PropertyDecl, TypeExpr, TypeRef, to_camel_case, to_pascal_case,
};

/// Declarations generated for one root interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedInterface {
    /// Root interface name.
    pub name: String,
    /// Nested declarations (innermost first), then the root.
    pub declarations: Vec<InterfaceDecl>,
    /// Auxiliary types referenced anywhere in the tree.
    pub imports: TypeImportSet,
}

impl GeneratedInterface {
    /// Returns the root declaration.
    #[must_use]
    pub fn root(&self) -> Option<&InterfaceDecl> {
        self.declarations.last()
    }

    /// Looks up a declaration by name.
    #[must_use]
    pub fn declaration(&self, name: &str) -> Option<&InterfaceDecl> {
        self.declarations.iter().find(|d| d.name == name)
    }
}

/// Generates the declaration tree for `fields` under `interface_name`.
///
/// # Arguments
/// * `interface_name` - Name of the root interface (e.g. `PricingCardConfig`)
/// * `fields` - Field descriptors in schema order
#[must_use]
pub fn generate_interface(interface_name: &str, fields: &[FieldDescriptor]) -> GeneratedInterface {
    let mut imports = TypeImportSet::new();
    let mut nested = Vec::new();

    let root = build_declaration(interface_name, fields, &mut imports, &mut nested);
    nested.push(root);

    GeneratedInterface {
        name: interface_name.to_string(),
        declarations: nested,
        imports,
    }
}

fn build_declaration(
    name: &str,
    fields: &[FieldDescriptor],
    imports: &mut TypeImportSet,
    nested: &mut Vec<InterfaceDecl>,
) -> InterfaceDecl {
    let mut decl = InterfaceDecl::new(name);

    for field in fields {
        let ty = match resolve_field_type(field, imports) {
            Resolution::Expr(expr) => {
                if expr == TypeExpr::Unknown {
                    tracing::debug!(
                        "Field '{}' has unknown tag '{}'",
                        field.id,
                        field.field_type
                    );
                }
                TypeRef::Expr(expr)
            }
            Resolution::Group => {
                let children = field.children();
                if children.is_empty() {
                    TypeRef::Expr(TypeExpr::OpenMap)
                } else {
                    let nested_name = format!("{}{}", name, to_pascal_case(&field.id));
                    tracing::debug!("Synthesizing nested interface {}", nested_name);
                    let child = build_declaration(&nested_name, children, imports, nested);
                    nested.push(child);
                    TypeRef::Declaration(nested_name)
                }
            }
        };

        decl.properties.push(PropertyDecl {
            name: to_camel_case(&field.id),
            ty,
            doc: field.doc().map(str::to_string),
        });
    }

    decl
}
