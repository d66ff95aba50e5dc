//! Structural checks that the schema alone cannot express.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use crate::ProjectSpec;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Coordinate or identity field is empty or whitespace-only.
    #[error("project field `{0}` cannot be blank")]
    BlankField(&'static str),
    /// Two publications share a name; only the first one is configured.
    #[error("duplicate publication name: {0}")]
    DuplicatePublication(String),
    /// An artifact entry names no task.
    #[error("publication \"{0}\" declares an artifact with an empty task name")]
    EmptyArtifactTask(String),
    /// The name is used as a directory name when descriptors are written.
    #[error("publication name \"{0}\" must be a single non-empty path segment")]
    InvalidPublicationName(String),
}

impl ValidationError {
    /// Fatal errors abort resolution, the rest are reported as warnings.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::DuplicatePublication(_))
    }
}

#[must_use]
pub fn validate_spec(spec: &ProjectSpec) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (field, value) in [
        ("name", &spec.name),
        ("version", &spec.version),
        ("group", &spec.group),
        ("packageName", &spec.package_name),
    ] {
        if value.trim().is_empty() {
            errors.push(ValidationError::BlankField(field));
        }
    }

    let mut names = HashSet::new();
    for publication in &spec.publications {
        if !is_path_segment(&publication.name) {
            errors.push(ValidationError::InvalidPublicationName(
                publication.name.clone(),
            ));
        }
        if !names.insert(publication.name.as_str()) {
            errors.push(ValidationError::DuplicatePublication(
                publication.name.clone(),
            ));
        }
        if publication
            .artifacts
            .iter()
            .any(|artifact| artifact.task_name.trim().is_empty())
        {
            errors.push(ValidationError::EmptyArtifactTask(publication.name.clone()));
        }
    }

    errors
}

fn is_path_segment(name: &str) -> bool {
    !name.trim().is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !Path::new(name).is_absolute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publication_spec::{ArtifactSpec, PublicationSpec};
    use rstest::rstest;

    fn publication(name: &str) -> PublicationSpec {
        PublicationSpec {
            r#type: "maven".to_string(),
            name: name.to_string(),
            component: "java".to_string(),
            artifacts: Vec::new(),
            pom: None,
        }
    }

    #[test]
    fn test_validate_valid_spec() {
        let mut spec = ProjectSpec::new("lib", "1.0.0", "org.acme", "org.acme.lib");
        spec.publications.push(publication("release"));
        assert!(validate_spec(&spec).is_empty());
    }

    #[test]
    fn test_validate_blank_coordinates() {
        let spec = ProjectSpec::new("lib", " ", "", "org.acme.lib");
        let errors = validate_spec(&spec);
        assert_eq!(
            errors,
            vec![
                ValidationError::BlankField("version"),
                ValidationError::BlankField("group"),
            ]
        );
        assert!(errors.iter().all(ValidationError::is_fatal));
    }

    #[test]
    fn test_validate_duplicate_publication_is_warning() {
        let mut spec = ProjectSpec::new("lib", "1.0.0", "org.acme", "org.acme.lib");
        spec.publications.push(publication("release"));
        spec.publications.push(publication("release"));

        let errors = validate_spec(&spec);
        assert_eq!(
            errors,
            vec![ValidationError::DuplicatePublication("release".to_string())]
        );
        assert!(!errors[0].is_fatal());
    }

    #[rstest]
    #[case("")]
    #[case("  ")]
    #[case(".")]
    #[case("..")]
    #[case("../../escaped")]
    #[case("/tmp/escaped")]
    #[case("nested/release")]
    #[case("C:\\escaped")]
    fn test_validate_invalid_publication_name(#[case] name: &str) {
        let mut spec = ProjectSpec::new("lib", "1.0.0", "org.acme", "org.acme.lib");
        spec.publications.push(publication(name));

        let errors = validate_spec(&spec);
        assert_eq!(
            errors,
            vec![ValidationError::InvalidPublicationName(name.to_string())]
        );
        assert!(errors[0].is_fatal());
    }

    #[rstest]
    #[case("release")]
    #[case("release-1.0")]
    #[case("..release")]
    fn test_validate_valid_publication_name(#[case] name: &str) {
        let mut spec = ProjectSpec::new("lib", "1.0.0", "org.acme", "org.acme.lib");
        spec.publications.push(publication(name));
        assert!(validate_spec(&spec).is_empty());
    }

    #[test]
    fn test_validate_empty_artifact_task() {
        let mut spec = ProjectSpec::new("lib", "1.0.0", "org.acme", "org.acme.lib");
        let mut release = publication("release");
        release.artifacts.push(ArtifactSpec::new("  ", false));
        spec.publications.push(release);

        let errors = validate_spec(&spec);
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::EmptyArtifactTask(name)] if name == "release"
        ));
    }
}
