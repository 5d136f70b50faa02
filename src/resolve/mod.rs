use serde_json::Value;

use crate::path::{Segment, Spath};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Field or item not found")]
    NotFound,

    #[error("Type mismatch encountered during resolution, expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl ResolveError {
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        ResolveError::TypeMismatch {
            expected: expected.to_string(),
            actual: found.to_string(),
        }
    }
}

/// Walks `doc` along `path` and returns a reference to the addressed value.
pub fn resolve_ref<'a>(doc: &'a Value, path: &Spath) -> Result<&'a Value, ResolveError> {
    let mut current = doc;
    for segment in path {
        current = match segment {
            Segment::Field(field) => resolve_field(current, field)?,
            Segment::Index(index) => resolve_index(current, *index)?,
        };
    }

    Ok(current)
}

fn resolve_field<'a>(doc: &'a Value, field: &str) -> Result<&'a Value, ResolveError> {
    match doc {
        Value::Object(map) => map.get(field).ok_or(ResolveError::NotFound),
        other => Err(ResolveError::type_mismatch("object", value_type_desc(other))),
    }
}

fn resolve_index<'a>(doc: &'a Value, index: usize) -> Result<&'a Value, ResolveError> {
    match doc {
        Value::Array(items) => items.get(index).ok_or(ResolveError::NotFound),
        // Objects can carry digit-named keys, e.g. {"0": ...}
        Value::Object(map) => map.get(&index.to_string()).ok_or(ResolveError::NotFound),
        other => Err(ResolveError::type_mismatch(
            "array or object",
            value_type_desc(other),
        )),
    }
}

pub fn value_type_desc(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
