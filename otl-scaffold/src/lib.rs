//! # OTL Scaffold
//!
//! Schema-driven component scaffolding for OTL CMS engine projects.
//!
//! Given the block and section schemas of a deployment, OTL Scaffold
//! generates typed React component stubs and registers them in the engine's
//! registry files.
//!
//! ## Features
//!
//! - **Typed config interfaces** - Every schema field tag maps to a TypeScript type
//! - **Nested groups** - Group fields become their own named interfaces
//! - **Minimal imports** - Only the CMS types a component references are imported
//! - **Idempotent registration** - Re-running a scaffold never duplicates a registration
//!
//! ## Quick Start
//!
//! ```ignore
//! use otl_scaffold::prelude::*;
//!
//! let schemas = parse_block_schemas(&body)?;
//! let schema = find_block_schema(&schemas, "pricing-card").unwrap();
//!
//! let generator = Generator::default();
//! let file = generator.generate_for_schema(ComponentKind::Block, schema);
//! file.write_under(layout.root())?;
//!
//! let entry = generator.registry_entry(ComponentKind::Block, "pricing-card");
//! update_registry_file(&layout.registry_file(ComponentKind::Block), &entry)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Field descriptors, schema payloads and declaration IR
//! - [`codegen`] - Type resolution, component generation and registry patching

pub mod prelude;

/// Schema payloads, field descriptors and declaration IR.
pub mod schema {
    pub use otl_scaffold_schema::*;
}

/// Component generation and registry patching.
pub mod codegen {
    pub use otl_scaffold_codegen::*;
}

// Re-export commonly used items at the crate root
pub use otl_scaffold_codegen::{
    CodegenError, ComponentKind, GeneratedFile, Generator, GeneratorConfig, RegistryEntry,
    generate_block_component, generate_section_component,
};
pub use otl_scaffold_schema::{FieldDescriptor, SchemaError};
