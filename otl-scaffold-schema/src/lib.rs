//! # OTL Scaffold Schema
//!
//! Schema definitions consumed by the OTL component scaffolder.
//!
//! This crate provides:
//! - Field descriptors and the closed set of known field tags
//! - Block and section schema payloads with their response envelopes
//! - JSON parsing of schema endpoint bodies
//! - Naming helpers and the declaration tree used for code generation
//! - Name-collision diagnostics for nested group declarations

pub mod error;
pub mod field;
pub mod ir;
pub mod parser;
pub mod schemas;
pub mod types;
pub mod validation;

pub use error::SchemaError;
pub use field::{FieldDescriptor, FieldOption};
pub use ir::{InterfaceDecl, PropertyDecl, TypeExpr, TypeRef, to_camel_case, to_pascal_case};
pub use parser::{
    find_block_schema, find_section_schema, parse_block_schema, parse_block_schemas, parse_fields,
    parse_section_schema, parse_section_schemas,
};
pub use schemas::{ApiSuccessResponse, BlockSchema, BlockSchemaList, ComponentSchema, SectionSchema};
pub use types::FieldTag;
pub use validation::{NameCollision, find_name_collisions};
