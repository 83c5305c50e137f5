//! Schema payload parser.
//!
//! Decodes the JSON bodies returned by the deployment schema endpoints into
//! the schema representation. Fetching the bodies is left to the caller.

use crate::error::SchemaError;
use crate::field::FieldDescriptor;
use crate::schemas::{
    ApiSuccessResponse, BlockSchema, BlockSchemaList, ComponentSchema, SectionSchema,
};
use serde::de::DeserializeOwned;

/// Parses a bare JSON array of field descriptors.
///
/// # Errors
/// Returns `SchemaError::Json` if the input is not a valid field array.
pub fn parse_fields(json: &str) -> Result<Vec<FieldDescriptor>, SchemaError> {
    Ok(serde_json::from_str(json)?)
}

/// Parses the block schema list response.
///
/// # Arguments
/// * `json` - Body of `GET .../schemas/blocks`
///
/// # Errors
/// Returns `SchemaError` if the body is malformed or flagged unsuccessful.
pub fn parse_block_schemas(json: &str) -> Result<Vec<BlockSchema>, SchemaError> {
    let list: BlockSchemaList = unwrap_envelope(json, "block schema list")?;
    Ok(list.schemas)
}

/// Parses a single block schema response.
///
/// # Errors
/// Returns `SchemaError` if the body is malformed or flagged unsuccessful.
pub fn parse_block_schema(json: &str) -> Result<BlockSchema, SchemaError> {
    unwrap_envelope(json, "block schema")
}

/// Parses the section schema list response.
///
/// Unlike blocks, the backend returns sections as a bare array inside the
/// envelope.
///
/// # Errors
/// Returns `SchemaError` if the body is malformed or flagged unsuccessful.
pub fn parse_section_schemas(json: &str) -> Result<Vec<SectionSchema>, SchemaError> {
    unwrap_envelope(json, "section schema list")
}

/// Parses a single section schema response.
///
/// # Errors
/// Returns `SchemaError` if the body is malformed or flagged unsuccessful.
pub fn parse_section_schema(json: &str) -> Result<SectionSchema, SchemaError> {
    unwrap_envelope(json, "section schema")
}

/// Finds a block schema by its kebab-case type.
#[must_use]
pub fn find_block_schema<'a>(
    schemas: &'a [BlockSchema],
    type_name: &str,
) -> Option<&'a BlockSchema> {
    find_by_type(schemas, type_name)
}

/// Finds a section schema by its kebab-case type.
#[must_use]
pub fn find_section_schema<'a>(
    schemas: &'a [SectionSchema],
    type_name: &str,
) -> Option<&'a SectionSchema> {
    find_by_type(schemas, type_name)
}

fn find_by_type<'a, S: ComponentSchema>(schemas: &'a [S], type_name: &str) -> Option<&'a S> {
    schemas.iter().find(|s| s.schema_type() == type_name)
}

fn unwrap_envelope<T: DeserializeOwned>(json: &str, context: &str) -> Result<T, SchemaError> {
    let response: ApiSuccessResponse<T> = serde_json::from_str(json)?;
    if !response.success {
        return Err(SchemaError::unsuccessful(context));
    }
    Ok(response.data)
}
