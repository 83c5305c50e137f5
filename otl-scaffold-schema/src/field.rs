//! Schema field descriptors.
//!
//! Field descriptors arrive from the backend as camelCase JSON and are
//! treated as already-validated input.

use crate::types::FieldTag;
use serde::{Deserialize, Serialize};

/// A single field of a block or section schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Field identifier (kebab, snake or camel case).
    pub id: String,
    /// Field tag as sent by the backend.
    #[serde(rename = "type")]
    pub field_type: String,
    /// Human-readable label.
    #[serde(default)]
    pub label: String,
    /// Optional description, emitted as a doc comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the editor requires a value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Default value, opaque to the scaffolder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,
    /// Whether a select accepts several values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,
    /// Child fields, only meaningful for group fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldDescriptor>>,
    /// Nested property descriptors, carried but not interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<FieldDescriptor>>,
    /// Select options, carried but not interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
}

impl FieldDescriptor {
    /// Creates a field with the given id and tag. The label defaults to the id.
    #[must_use]
    pub fn new(id: impl Into<String>, field_type: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            field_type: field_type.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the `multiple` flag.
    #[must_use]
    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = Some(multiple);
        self
    }

    /// Sets the child fields.
    #[must_use]
    pub fn with_fields(mut self, fields: Vec<FieldDescriptor>) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Returns the parsed field tag.
    #[must_use]
    pub fn tag(&self) -> FieldTag {
        FieldTag::parse(&self.field_type)
    }

    /// Returns true if the field is flagged as accepting multiple values.
    #[must_use]
    pub fn is_multiple(&self) -> bool {
        self.multiple.unwrap_or(false)
    }

    /// Returns the child fields of a group.
    ///
    /// Non-group fields always yield an empty slice, even if the payload
    /// carried a `fields` array.
    #[must_use]
    pub fn children(&self) -> &[FieldDescriptor] {
        if !self.tag().is_group() {
            return &[];
        }
        self.fields.as_deref().unwrap_or(&[])
    }

    /// Returns the description if present and non-empty.
    #[must_use]
    pub fn doc(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// A labelled select option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    /// Display label.
    pub label: String,
    /// Stored value.
    pub value: String,
}
