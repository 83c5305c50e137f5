//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use otl_scaffold::prelude::*;
//! ```

// Schema types
pub use otl_scaffold_schema::{
    BlockSchema, ComponentSchema, FieldDescriptor, FieldTag, SchemaError, SectionSchema,
    find_block_schema, find_section_schema, parse_block_schemas, parse_fields,
    parse_section_schemas,
};

// Codegen types
pub use otl_scaffold_codegen::{
    CodegenError, ComponentKind, EngineLayout, GeneratedFile, GeneratedInterface, Generator,
    GeneratorConfig, PatchOutcome, RegistryEntry, TypeImportSet, build_import_line,
    generate_interface, patch_registry, resolve_field_type, update_registry_file,
};
