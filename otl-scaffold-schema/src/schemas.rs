//! Block and section schema payloads.
//!
//! These mirror the JSON returned by the deployment schema endpoints. The
//! backend wraps every response in an [`ApiSuccessResponse`] envelope; block
//! lists are additionally wrapped in [`BlockSchemaList`], section lists are
//! returned as a bare array.

use crate::field::FieldDescriptor;
use serde::{Deserialize, Serialize};

/// Common view over block and section schemas.
pub trait ComponentSchema {
    /// Kebab-case schema type (e.g. `pricing-card`).
    fn schema_type(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;

    /// Ordered field descriptors.
    fn fields(&self) -> &[FieldDescriptor];
}

/// Block schema definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSchema {
    /// Schema identifier.
    pub schema_id: String,
    /// Owning deployment.
    pub deployment_id: String,
    /// Kebab-case block type.
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Display name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Field descriptors in authoring order.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    /// Allowed placement targets.
    #[serde(default)]
    pub targets: Option<Vec<String>>,
    /// Icon name.
    #[serde(default)]
    pub icon: Option<String>,
    /// Preview image URL.
    #[serde(default)]
    pub preview_image: Option<String>,
    /// Sort relevancy.
    #[serde(default)]
    pub relevancy: i64,
    /// Whether the schema ships with the engine.
    #[serde(default)]
    pub is_built_in: bool,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: String,
}

/// Section schema definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSchema {
    /// Schema identifier.
    pub schema_id: String,
    /// Owning deployment.
    pub deployment_id: String,
    /// Kebab-case section type.
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Display name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Field descriptors in authoring order.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    /// Icon name.
    #[serde(default)]
    pub icon: Option<String>,
    /// Preview image URL.
    #[serde(default)]
    pub preview_image: Option<String>,
    /// Sort relevancy.
    #[serde(default)]
    pub relevancy: i64,
    /// Whether the schema ships with the engine.
    #[serde(default)]
    pub is_built_in: bool,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: String,
    /// Author.
    #[serde(default)]
    pub created_by: String,
}

impl ComponentSchema for BlockSchema {
    fn schema_type(&self) -> &str {
        &self.schema_type
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }
}

impl ComponentSchema for SectionSchema {
    fn schema_type(&self) -> &str {
        &self.schema_type
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }
}

/// Envelope for successful backend responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSuccessResponse<T> {
    /// Success flag.
    pub success: bool,
    /// Payload.
    pub data: T,
}

/// Payload of the block schema list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSchemaList {
    /// Block schemas.
    pub schemas: Vec<BlockSchema>,
    /// Total count on the backend.
    #[serde(default)]
    pub total: u64,
}
