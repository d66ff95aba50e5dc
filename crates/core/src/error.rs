//! Error taxonomy for reading specifications and configuring publications.

use thiserror::Error;

use crate::validate::ValidationError;

/// A document could not be turned into the typed schema.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("{document}: malformed JSON: {source}")]
    Syntax {
        document: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{document}: missing required field `{field}` in `{object}`")]
    MissingField {
        document: String,
        field: &'static str,
        object: String,
    },

    #[error("{document}: expected {expected} at `{path}`")]
    UnexpectedType {
        document: String,
        expected: &'static str,
        path: String,
    },

    #[error("{document}: invalid value: {source}")]
    Invalid {
        document: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum SpecError {
    #[error("\"{file}\" not found in \"{location}\"")]
    SpecificationNotFound { file: String, location: String },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("invalid project specification: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error(
        "The task \"{task}\" is not defined and is required for publication \"{publication}\""
    )]
    MissingRequiredArtifact { task: String, publication: String },

    #[error("Failed to render {descriptor} for publication \"{publication}\": {message}")]
    Render {
        publication: String,
        descriptor: &'static str,
        message: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SpecError>;

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specification_not_found_display() {
        let err = SpecError::SpecificationNotFound {
            file: "project.gradle.json".into(),
            location: "/work/lib".into(),
        };
        assert_eq!(
            err.to_string(),
            "\"project.gradle.json\" not found in \"/work/lib\""
        );
    }

    #[test]
    fn test_missing_field_names_field_and_object() {
        let err = DecodeError::MissingField {
            document: "project.gradle.json".into(),
            field: "group",
            object: "project".into(),
        };
        let message = err.to_string();
        assert!(message.contains("`group`"));
        assert!(message.contains("`project`"));
    }

    #[test]
    fn test_missing_required_artifact_display() {
        let err = SpecError::MissingRequiredArtifact {
            task: "javadocJar".into(),
            publication: "release".into(),
        };
        let message = err.to_string();
        assert!(message.contains("javadocJar"));
        assert!(message.contains("release"));
    }

    #[test]
    fn test_validation_joins_errors() {
        let err = SpecError::Validation(vec![
            ValidationError::BlankField("group"),
            ValidationError::BlankField("version"),
        ]);
        let message = err.to_string();
        assert!(message.contains("group"));
        assert!(message.contains("; "));
        assert!(message.contains("version"));
    }
}
