//! Intermediate representation for code generation.
//!
//! Field descriptors are resolved into a small tree of interface
//! declarations. Each property refers either to a concrete type expression
//! or to another declaration in the same tree; turning the tree into
//! TypeScript text is left to the code generator.

use std::fmt;

/// Concrete TypeScript type expressions a field can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeExpr {
    /// `string`
    String,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `string[]`
    StringList,
    /// `Record<string, unknown>`
    OpenMap,
    /// `unknown[]`
    UnknownList,
    /// `"boxed" | "edged" | "ignore"`
    ContainerBehavior,
    /// `ColorReference`
    ColorReference,
    /// `MediaReference`
    MediaReference,
    /// `ResponsiveValue<string>`
    ResponsiveString,
    /// `BlockInstance[]`
    BlockInstanceList,
    /// `LocalizedString`
    LocalizedString,
    /// `unknown`
    Unknown,
}

impl TypeExpr {
    /// Returns the TypeScript source for this expression.
    #[must_use]
    pub const fn ts_type(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::StringList => "string[]",
            Self::OpenMap => "Record<string, unknown>",
            Self::UnknownList => "unknown[]",
            Self::ContainerBehavior => r#""boxed" | "edged" | "ignore""#,
            Self::ColorReference => "ColorReference",
            Self::MediaReference => "MediaReference",
            Self::ResponsiveString => "ResponsiveValue<string>",
            Self::BlockInstanceList => "BlockInstance[]",
            Self::LocalizedString => "LocalizedString",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ts_type())
    }
}

/// Type of a generated property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A concrete expression.
    Expr(TypeExpr),
    /// A nested declaration of the same tree, by name.
    Declaration(String),
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expr(expr) => expr.fmt(f),
            Self::Declaration(name) => f.write_str(name),
        }
    }
}

/// A single optional property of a generated interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDecl {
    /// camelCase property name.
    pub name: String,
    /// Property type.
    pub ty: TypeRef,
    /// Doc comment text.
    pub doc: Option<String>,
}

/// A generated interface declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDecl {
    /// Interface name.
    pub name: String,
    /// Properties in schema order.
    pub properties: Vec<PropertyDecl>,
}

impl InterfaceDecl {
    /// Creates an empty declaration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyDecl> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Returns the property names in order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|p| p.name.as_str())
    }
}

/// Converts a kebab-case string to PascalCase.
///
/// Splits on `-` only and uppercases the first character of every segment;
/// the rest of each segment is kept as is.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for segment in s.split('-') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

/// Converts a snake_case or kebab-case field id to camelCase.
///
/// A `-` or `_` directly followed by a lowercase ASCII letter is dropped and
/// the letter uppercased. Everything else passes through unchanged.
#[must_use]
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' || c == '_' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    result.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        result.push(c);
    }

    result
}
