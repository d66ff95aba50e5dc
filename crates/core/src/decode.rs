use serde_json::Value;

use crate::{
    ProjectSpec,
    alias::{self, ObjectKind},
    developer_spec::Developers,
    error::DecodeError,
};

/// Decodes a `project.gradle.json` document. `document` names the source in errors.
///
/// # Errors
/// Returns error if the bytes are not JSON, a required field is missing or a value has the wrong type.
pub fn decode_project(document: &str, bytes: &[u8]) -> Result<ProjectSpec, DecodeError> {
    let raw = parse(document, bytes)?;
    let normalized = alias::normalize(document, raw, ObjectKind::Project)?;
    serde_json::from_value(normalized).map_err(|source| DecodeError::Invalid {
        document: document.to_string(),
        source,
    })
}

/// Decodes a developer file: a JSON array of developer objects.
///
/// # Errors
/// Returns error if the document is not an array of valid developer objects.
pub fn decode_developers(document: &str, bytes: &[u8]) -> Result<Developers, DecodeError> {
    let raw = parse(document, bytes)?;
    let normalized = alias::normalize_list(document, raw, ObjectKind::Developer, "developers")?;
    serde_json::from_value(normalized).map_err(|source| DecodeError::Invalid {
        document: document.to_string(),
        source,
    })
}

/// Pretty-printed canonical form of a specification.
///
/// # Errors
/// Returns error if serialization fails.
pub fn encode_project(spec: &ProjectSpec) -> serde_json::Result<String> {
    serde_json::to_string_pretty(spec)
}

fn parse(document: &str, bytes: &[u8]) -> Result<Value, DecodeError> {
    serde_json::from_slice(bytes).map_err(|source| DecodeError::Syntax {
        document: document.to_string(),
        source,
    })
}
