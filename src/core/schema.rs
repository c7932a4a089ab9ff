//! Schema generation and validation.

use std::collections::HashSet;

use tracing::debug;

use crate::core::constants::SCHEMA_DRAFT;
use crate::core::domain::{Property, RecordSet, Schema};
use crate::error::{ParseError, Result};

/// Build a schema declaring every key of `set` as a required string.
///
/// Descriptions come from the record comments. For duplicated keys the
/// first occurrence wins.
pub fn generate(set: &RecordSet) -> Schema {
    let mut schema = Schema {
        schema: SCHEMA_DRAFT.to_string(),
        kind: "object".to_string(),
        ..Schema::default()
    };

    for record in set.records() {
        if schema.properties.contains_key(&record.key) {
            continue;
        }
        schema.properties.insert(
            record.key.clone(),
            Property {
                kind: "string".to_string(),
                description: record.description(),
            },
        );
        schema.required.push(record.key.clone());
    }

    schema
}

/// Pretty JSON text of [`generate`].
pub fn generate_json(set: &RecordSet) -> Result<String> {
    let schema = generate(set);
    serde_json::to_string_pretty(&schema)
        .map_err(|e| ParseError::Schema(e).into())
}

/// Parse schema JSON text.
///
/// # Errors
///
/// Returns `ParseError::Schema` when the text is not a schema object.
pub fn parse(text: &str) -> Result<Schema> {
    serde_json::from_str(text).map_err(|e| ParseError::Schema(e).into())
}

/// Compare `set` against the schema in `schema_json`.
///
/// Returns one message per discrepancy: required keys missing from the file
/// (schema order) followed by file keys the schema does not declare (file
/// order). An empty list means the file is valid. Values are not checked.
pub fn validate(set: &RecordSet, schema_json: &str) -> Result<Vec<String>> {
    let schema = parse(schema_json)?;
    Ok(validate_against(set, &schema))
}

/// [`validate`] with an already parsed schema.
pub fn validate_against(set: &RecordSet, schema: &Schema) -> Vec<String> {
    let keys = set.key_set();
    let mut errors = Vec::new();

    for required in &schema.required {
        if !keys.contains(required.as_str()) {
            errors.push(format!("Missing required key: {}", required));
        }
    }

    let mut seen = HashSet::new();
    for key in set.keys() {
        if seen.insert(key) && !schema.properties.contains_key(key) {
            errors.push(format!("Key not in schema: {}", key));
        }
    }

    debug!(discrepancies = errors.len(), "validation finished");
    errors
}
