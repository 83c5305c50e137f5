//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema payload error.
    #[error("schema error: {0}")]
    Schema(#[from] otl_scaffold_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Registry file could not be read or written.
    #[error("registry file '{}': {source}", .path.display())]
    Registry {
        /// Registry file path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

impl CodegenError {
    /// Creates a registry error for the given path.
    pub fn registry(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Registry {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_names_file() {
        let err = CodegenError::registry(
            "/engine/src/lib/registries/block-registry.ts",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(
            err.to_string(),
            "registry file '/engine/src/lib/registries/block-registry.ts': not found"
        );
    }

    #[test]
    fn test_schema_error_from() {
        let err: CodegenError =
            otl_scaffold_schema::SchemaError::not_found("section", "grid").into();
        assert!(matches!(err, CodegenError::Schema(_)));
    }
}
