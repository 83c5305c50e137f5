//! Generator configuration and engine project conventions.

use crate::imports::CMS_TYPES_MODULE;
use std::fmt;
use std::path::{Path, PathBuf};

/// Default import root for engine components.
pub const COMPONENT_IMPORT_ROOT: &str = "@/components";

/// Kind of component being scaffolded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// A block component.
    Block,
    /// A section component.
    Section,
}

impl ComponentKind {
    /// Lowercase kind name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Section => "section",
        }
    }

    /// Suffix appended to the PascalCase type to form the component name.
    #[must_use]
    pub const fn component_suffix(self) -> &'static str {
        match self {
            Self::Block => "Block",
            Self::Section => "Section",
        }
    }

    /// Props wrapper type exported by the CMS types module.
    #[must_use]
    pub const fn props_type(self) -> &'static str {
        match self {
            Self::Block => "BlockComponentProps",
            Self::Section => "SectionComponentProps",
        }
    }

    /// Registry instance variable in the registry file.
    #[must_use]
    pub const fn registry_variable(self) -> &'static str {
        match self {
            Self::Block => "blockRegistry",
            Self::Section => "sectionRegistry",
        }
    }

    /// Directory under `src/components` holding components of this kind.
    #[must_use]
    pub const fn components_dir(self) -> &'static str {
        match self {
            Self::Block => "blocks",
            Self::Section => "sections",
        }
    }

    /// Registry file name under `src/lib/registries`.
    #[must_use]
    pub const fn registry_file_name(self) -> &'static str {
        match self {
            Self::Block => "block-registry.ts",
            Self::Section => "section-registry.ts",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for code generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    types_module: String,
    component_import_root: String,
}

impl GeneratorConfig {
    /// Returns a builder with default settings.
    #[must_use]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Module the props wrapper and auxiliary types are imported from.
    #[must_use]
    pub fn types_module(&self) -> &str {
        &self.types_module
    }

    /// Import root for generated components (e.g. `@/components`).
    #[must_use]
    pub fn component_import_root(&self) -> &str {
        &self.component_import_root
    }

    /// Import path of a generated component.
    #[must_use]
    pub fn component_import_path(&self, kind: ComponentKind, type_name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.component_import_root.trim_end_matches('/'),
            kind.components_dir(),
            type_name
        )
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfigBuilder::new().build()
    }
}

/// Builder for [`GeneratorConfig`].
#[derive(Debug, Clone)]
pub struct GeneratorConfigBuilder {
    types_module: String,
    component_import_root: String,
}

impl GeneratorConfigBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            types_module: CMS_TYPES_MODULE.to_string(),
            component_import_root: COMPONENT_IMPORT_ROOT.to_string(),
        }
    }

    /// Sets the types module.
    #[must_use]
    pub fn types_module(mut self, module: impl Into<String>) -> Self {
        self.types_module = module.into();
        self
    }

    /// Sets the component import root.
    #[must_use]
    pub fn component_import_root(mut self, root: impl Into<String>) -> Self {
        self.component_import_root = root.into();
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> GeneratorConfig {
        GeneratorConfig {
            types_module: self.types_module,
            component_import_root: self.component_import_root,
        }
    }
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// File layout of an engine project rooted at a known directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineLayout {
    root: PathBuf,
}

impl EngineLayout {
    /// Creates a layout for the given engine root.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Engine root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding components of `kind`.
    #[must_use]
    pub fn components_dir(&self, kind: ComponentKind) -> PathBuf {
        self.root.join(component_dir_relative(kind))
    }

    /// Path of the generated component file.
    #[must_use]
    pub fn component_file(&self, kind: ComponentKind, type_name: &str) -> PathBuf {
        self.root.join(component_file_relative(kind, type_name))
    }

    /// Path of the registry file for `kind`.
    #[must_use]
    pub fn registry_file(&self, kind: ComponentKind) -> PathBuf {
        self.root
            .join("src")
            .join("lib")
            .join("registries")
            .join(kind.registry_file_name())
    }
}

fn component_dir_relative(kind: ComponentKind) -> PathBuf {
    Path::new("src")
        .join("components")
        .join(kind.components_dir())
}

/// Component file path relative to the engine root.
#[must_use]
pub fn component_file_relative(kind: ComponentKind, type_name: &str) -> PathBuf {
    component_dir_relative(kind).join(format!("{type_name}.tsx"))
}
