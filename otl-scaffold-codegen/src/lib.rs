//! # OTL Scaffold Codegen
//!
//! TypeScript component generation from OTL CMS schemas.
//!
//! This crate provides:
//! - Field type resolution with auxiliary import tracking
//! - Config interface synthesis, nested groups included
//! - Block and section component file generation
//! - Idempotent registry file patching

pub mod config;
pub mod error;
pub mod generator;
pub mod imports;
pub mod interface;
pub mod registry;
pub mod resolver;
pub mod typescript;

pub use config::{ComponentKind, EngineLayout, GeneratorConfig, GeneratorConfigBuilder};
pub use error::CodegenError;
pub use generator::{GeneratedFile, Generator};
pub use imports::{AuxType, TypeImportSet, build_import_line, merged_import_line};
pub use interface::{GeneratedInterface, generate_interface};
pub use registry::{PatchOutcome, RegistryEntry, patch_registry, update_registry_file};
pub use resolver::{Resolution, resolve_field_type};

use otl_scaffold_schema::FieldDescriptor;

/// Generates a block component from schema fields.
///
/// # Arguments
/// * `type_name` - Kebab-case block type (e.g. `pricing-card`)
/// * `fields` - Schema fields
///
/// # Returns
/// The complete `.tsx` file content.
#[must_use]
pub fn generate_block_component(type_name: &str, fields: &[FieldDescriptor]) -> String {
    Generator::default()
        .generate_component(ComponentKind::Block, type_name, fields)
        .content
}

/// Generates a section component from schema fields.
#[must_use]
pub fn generate_section_component(type_name: &str, fields: &[FieldDescriptor]) -> String {
    Generator::default()
        .generate_component(ComponentKind::Section, type_name, fields)
        .content
}

/// Generates a component from a JSON array of field descriptors.
///
/// # Errors
/// Returns `CodegenError::Schema` if the JSON is malformed.
pub fn generate_from_json(
    kind: ComponentKind,
    type_name: &str,
    fields_json: &str,
) -> Result<String, CodegenError> {
    let fields = otl_scaffold_schema::parse_fields(fields_json)?;
    Ok(Generator::default()
        .generate_component(kind, type_name, &fields)
        .content)
}

/// Generates a component from a file holding a JSON field array.
///
/// # Errors
/// Returns `CodegenError` if reading or parsing fails.
pub fn generate_from_file(
    kind: ComponentKind,
    type_name: &str,
    path: &std::path::Path,
) -> Result<String, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_json(kind, type_name, &json)
}
