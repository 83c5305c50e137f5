//! Error types for schema payload parsing and lookup.

use thiserror::Error;

/// Error type for schema operations.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// JSON decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backend reported an unsuccessful response.
    #[error("API response for {context} was not successful")]
    Unsuccessful {
        /// What was being fetched.
        context: String,
    },

    /// No schema with the requested type exists.
    #[error("no {kind} schema found with type '{type_name}'")]
    NotFound {
        /// Kind of schema (block, section).
        kind: String,
        /// Requested schema type.
        type_name: String,
    },
}

impl SchemaError {
    /// Creates a not-found error.
    pub fn not_found(kind: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.into(),
            type_name: type_name.into(),
        }
    }

    /// Creates an unsuccessful-response error.
    pub fn unsuccessful(context: impl Into<String>) -> Self {
        Self::Unsuccessful {
            context: context.into(),
        }
    }
}
