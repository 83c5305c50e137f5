//! Main code generator.

use crate::config::{ComponentKind, GeneratorConfig, component_file_relative};
use crate::error::CodegenError;
use crate::registry::RegistryEntry;
use crate::typescript::ComponentGenerator;
use otl_scaffold_schema::{ComponentSchema, FieldDescriptor, find_name_collisions};
use std::path::{Path, PathBuf};

/// A generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the engine root.
    pub path: PathBuf,
    /// File content.
    pub content: String,
}

impl GeneratedFile {
    /// Writes the file under `root`, creating parent directories.
    ///
    /// Existing files are overwritten; callers decide beforehand whether
    /// that is allowed.
    ///
    /// # Errors
    /// Returns `CodegenError::Io` if a directory or the file cannot be written.
    pub fn write_under(&self, root: &Path) -> Result<PathBuf, CodegenError> {
        let target = root.join(&self.path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, &self.content)?;
        tracing::info!("Created {}", self.path.display());
        Ok(target)
    }
}

/// Component scaffolding generator.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a new generator.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates the component file for a schema type.
    ///
    /// # Arguments
    /// * `kind` - Block or section
    /// * `type_name` - Kebab-case schema type
    /// * `fields` - Schema fields in authoring order
    #[must_use]
    pub fn generate_component(
        &self,
        kind: ComponentKind,
        type_name: &str,
        fields: &[FieldDescriptor],
    ) -> GeneratedFile {
        let component = ComponentGenerator::new(&self.config, kind, type_name, fields);
        let config_name = component.config_name();

        for collision in find_name_collisions(&config_name, fields) {
            tracing::warn!(
                "Interface name {} is generated by several fields: {:?}",
                collision.name,
                collision.paths
            );
        }

        GeneratedFile {
            path: component_file_relative(kind, type_name),
            content: component.generate(),
        }
    }

    /// Generates the component file for a parsed schema.
    #[must_use]
    pub fn generate_for_schema<S: ComponentSchema>(
        &self,
        kind: ComponentKind,
        schema: &S,
    ) -> GeneratedFile {
        tracing::debug!("Generating {} for schema '{}'", kind, schema.name());
        self.generate_component(kind, schema.schema_type(), schema.fields())
    }

    /// Returns the registry entry for a schema type.
    #[must_use]
    pub fn registry_entry(&self, kind: ComponentKind, type_name: &str) -> RegistryEntry {
        RegistryEntry::with_config(&self.config, kind, type_name)
    }
}
