//! Key normalization for specification documents.
//!
//! Documents are written by hand, so most fields accept several spellings
//! (`build-info`, `info-build`, `buildInfo`, ...). Normalization rewrites every
//! accepted spelling to the canonical camelCase key used by the typed model,
//! drops keys nobody knows about and reports missing required keys together
//! with the object that should have contained them.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::DecodeError;

/// Object types that appear in a specification document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Project,
    BuildInfo,
    Publication,
    Artifact,
    Pom,
    License,
    Developer,
    Scm,
}

#[derive(Debug, Clone, Copy)]
enum Shape {
    Value,
    Object(ObjectKind),
    List(ObjectKind),
}

#[derive(Debug)]
struct FieldRule {
    key: &'static str,
    aliases: &'static [&'static str],
    required: bool,
    shape: Shape,
}

impl FieldRule {
    const fn required(key: &'static str) -> Self {
        Self {
            key,
            aliases: &[],
            required: true,
            shape: Shape::Value,
        }
    }

    const fn optional(key: &'static str) -> Self {
        Self {
            key,
            aliases: &[],
            required: false,
            shape: Shape::Value,
        }
    }

    const fn aliases(self, aliases: &'static [&'static str]) -> Self {
        Self { aliases, ..self }
    }

    const fn shape(self, shape: Shape) -> Self {
        Self { shape, ..self }
    }
}

const PROJECT_FIELDS: &[FieldRule] = &[
    FieldRule::required("name"),
    FieldRule::required("version"),
    FieldRule::required("group"),
    FieldRule::required("packageName").aliases(&["package"]),
    FieldRule::optional("buildInfo")
        .aliases(&["build-info", "info-build"])
        .shape(Shape::Object(ObjectKind::BuildInfo)),
    FieldRule::optional("publications").shape(Shape::List(ObjectKind::Publication)),
];

const BUILD_INFO_FIELDS: &[FieldRule] = &[
    FieldRule::required("outPackage").aliases(&["package", "package-out", "out-package"]),
    FieldRule::optional("filename").aliases(&["file-name", "file", "name"]),
];

const PUBLICATION_FIELDS: &[FieldRule] = &[
    FieldRule::required("type"),
    FieldRule::required("name"),
    FieldRule::required("component"),
    FieldRule::optional("artifacts").shape(Shape::List(ObjectKind::Artifact)),
    FieldRule::optional("pom").shape(Shape::Object(ObjectKind::Pom)),
];

const ARTIFACT_FIELDS: &[FieldRule] = &[
    FieldRule::required("taskName").aliases(&["task-name", "name", "task"]),
    FieldRule::optional("required"),
];

const POM_FIELDS: &[FieldRule] = &[
    FieldRule::required("url"),
    FieldRule::required("description"),
    FieldRule::required("artifactId").aliases(&["artifact-id", "artifact-name", "artifact"]),
    FieldRule::optional("licenses").shape(Shape::List(ObjectKind::License)),
    FieldRule::optional("developers").shape(Shape::List(ObjectKind::Developer)),
    FieldRule::optional("developersRef").aliases(&["developers-ref"]),
    FieldRule::optional("scm").shape(Shape::Object(ObjectKind::Scm)),
];

const LICENSE_FIELDS: &[FieldRule] = &[FieldRule::required("name"), FieldRule::required("value")];

const DEVELOPER_FIELDS: &[FieldRule] = &[
    FieldRule::required("id"),
    FieldRule::optional("name"),
    FieldRule::optional("email"),
    FieldRule::optional("organization"),
    FieldRule::optional("organizationUrl").aliases(&["organization-url", "url-organization"]),
    FieldRule::optional("roles"),
    FieldRule::optional("timezone").aliases(&["time-zone"]),
    FieldRule::optional("url"),
];

const SCM_FIELDS: &[FieldRule] = &[
    FieldRule::required("url"),
    FieldRule::required("branch"),
    FieldRule::optional("connection"),
    FieldRule::optional("developerConnection").aliases(&["connection-dev", "dev-connection"]),
];

impl ObjectKind {
    fn rules(self) -> &'static [FieldRule] {
        match self {
            Self::Project => PROJECT_FIELDS,
            Self::BuildInfo => BUILD_INFO_FIELDS,
            Self::Publication => PUBLICATION_FIELDS,
            Self::Artifact => ARTIFACT_FIELDS,
            Self::Pom => POM_FIELDS,
            Self::License => LICENSE_FIELDS,
            Self::Developer => DEVELOPER_FIELDS,
            Self::Scm => SCM_FIELDS,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::BuildInfo => "buildInfo",
            Self::Publication => "publication",
            Self::Artifact => "artifact",
            Self::Pom => "pom",
            Self::License => "license",
            Self::Developer => "developer",
            Self::Scm => "scm",
        }
    }

    /// Accepted spellings of a canonical key, canonical first. Empty for unknown keys.
    #[must_use]
    pub fn spellings(self, key: &str) -> Vec<&'static str> {
        self.rules()
            .iter()
            .find(|rule| rule.key == key)
            .map(|rule| {
                std::iter::once(rule.key)
                    .chain(rule.aliases.iter().copied())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Normalizes a single object of the given kind. The object path in errors starts at `kind.label()`.
///
/// # Errors
/// Returns error if a required key is missing or a nested value has the wrong shape.
pub fn normalize(document: &str, value: Value, kind: ObjectKind) -> Result<Value, DecodeError> {
    normalize_object(document, value, kind, kind.label().to_string())
}

/// Normalizes a top-level array whose elements are all of the given kind.
///
/// # Errors
/// Returns error if the value is not an array or any element fails to normalize.
pub fn normalize_list(
    document: &str,
    value: Value,
    kind: ObjectKind,
    label: &str,
) -> Result<Value, DecodeError> {
    normalize_value(document, value, Shape::List(kind), label.to_string())
}

fn normalize_value(
    document: &str,
    value: Value,
    shape: Shape,
    path: String,
) -> Result<Value, DecodeError> {
    match shape {
        Shape::Value => Ok(value),
        Shape::Object(kind) => normalize_object(document, value, kind, path),
        Shape::List(kind) => {
            let Value::Array(items) = value else {
                return Err(DecodeError::UnexpectedType {
                    document: document.to_string(),
                    expected: "an array",
                    path,
                });
            };
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| normalize_object(document, item, kind, format!("{path}[{index}]")))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
    }
}

fn normalize_object(
    document: &str,
    value: Value,
    kind: ObjectKind,
    path: String,
) -> Result<Value, DecodeError> {
    let Value::Object(mut source) = value else {
        return Err(DecodeError::UnexpectedType {
            document: document.to_string(),
            expected: "an object",
            path,
        });
    };

    let mut normalized = Map::new();
    for rule in kind.rules() {
        match take_field(&mut source, rule, &path) {
            Some(value) => {
                let child_path = format!("{path}.{}", rule.key);
                let value = normalize_value(document, value, rule.shape, child_path)?;
                normalized.insert(rule.key.to_string(), value);
            }
            None if rule.required => {
                return Err(DecodeError::MissingField {
                    document: document.to_string(),
                    field: rule.key,
                    object: path,
                });
            }
            None => {}
        }
    }

    if !source.is_empty() {
        debug!(
            object = %path,
            keys = ?source.keys().collect::<Vec<_>>(),
            "ignoring unknown keys"
        );
    }
    Ok(Value::Object(normalized))
}

/// Removes every spelling of `rule` from `source`. `null` counts as absent;
/// the canonical key wins over aliases, earlier aliases over later ones.
fn take_field(source: &mut Map<String, Value>, rule: &FieldRule, path: &str) -> Option<Value> {
    let mut found = source.remove(rule.key).filter(|value| !value.is_null());
    for alias in rule.aliases {
        let Some(value) = source.remove(*alias).filter(|value| !value.is_null()) else {
            continue;
        };
        if found.is_none() {
            found = Some(value);
        } else {
            debug!(object = %path, key = rule.key, alias, "alias shadowed by an earlier spelling");
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn minimal_project() -> Value {
        json!({
            "name": "lib",
            "version": "1.0.0",
            "group": "org.acme",
            "package": "org.acme.lib"
        })
    }

    #[test]
    fn test_normalize_rewrites_aliases() {
        let mut project = minimal_project();
        project["info-build"] = json!({ "out-package": "org.acme.lib", "file": "info.properties" });

        let normalized = normalize("test.json", project, ObjectKind::Project).unwrap();
        assert_eq!(normalized["packageName"], "org.acme.lib");
        assert_eq!(normalized["buildInfo"]["outPackage"], "org.acme.lib");
        assert_eq!(normalized["buildInfo"]["filename"], "info.properties");
        assert!(normalized.get("package").is_none());
    }

    #[test]
    fn test_normalize_drops_unknown_keys() {
        let mut project = minimal_project();
        project["license-header"] = json!("ignored");

        let normalized = normalize("test.json", project, ObjectKind::Project).unwrap();
        assert!(normalized.get("license-header").is_none());
    }

    #[test]
    fn test_normalize_canonical_key_wins() {
        let mut project = minimal_project();
        project["packageName"] = json!("org.acme.canonical");

        let normalized = normalize("test.json", project, ObjectKind::Project).unwrap();
        assert_eq!(normalized["packageName"], "org.acme.canonical");
    }

    #[test]
    fn test_normalize_null_is_absent() {
        let mut project = minimal_project();
        project["build-info"] = json!({ "package": "org.acme", "file-name": null });

        let normalized = normalize("test.json", project, ObjectKind::Project).unwrap();
        assert!(normalized["buildInfo"].get("filename").is_none());
    }

    #[rstest]
    #[case("name")]
    #[case("version")]
    #[case("group")]
    fn test_normalize_missing_required(#[case] field: &str) {
        let mut project = minimal_project();
        project.as_object_mut().unwrap().remove(field);

        let err = normalize("test.json", project, ObjectKind::Project).unwrap_err();
        match err {
            DecodeError::MissingField {
                field: missing,
                object,
                ..
            } => {
                assert_eq!(missing, field);
                assert_eq!(object, "project");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_normalize_missing_nested_field_names_path() {
        let mut project = minimal_project();
        project["publications"] = json!([
            { "type": "maven", "name": "release", "component": "java",
              "pom": { "url": "https://acme.org", "description": "Lib" } }
        ]);

        let err = normalize("test.json", project, ObjectKind::Project).unwrap_err();
        match err {
            DecodeError::MissingField { field, object, .. } => {
                assert_eq!(field, "artifactId");
                assert_eq!(object, "project.publications[0].pom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_normalize_rejects_non_array_list() {
        let mut project = minimal_project();
        project["publications"] = json!({ "type": "maven" });

        let err = normalize("test.json", project, ObjectKind::Project).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnexpectedType { expected: "an array", .. }
        ));
    }

    #[test]
    fn test_normalize_list_of_developers() {
        let developers = json!([
            { "id": "jdoe", "time-zone": "UTC", "url-organization": "https://acme.org" }
        ]);

        let normalized =
            normalize_list("devs.json", developers, ObjectKind::Developer, "developers").unwrap();
        assert_eq!(normalized[0]["timezone"], "UTC");
        assert_eq!(normalized[0]["organizationUrl"], "https://acme.org");
    }

    #[test]
    fn test_normalize_list_missing_id_names_index() {
        let developers = json!([{ "id": "a" }, { "name": "No Id" }]);

        let err = normalize_list("devs.json", developers, ObjectKind::Developer, "developers")
            .unwrap_err();
        assert!(err.to_string().contains("developers[1]"));
    }

    #[test]
    fn test_spellings() {
        assert_eq!(
            ObjectKind::BuildInfo.spellings("filename"),
            vec!["filename", "file-name", "file", "name"]
        );
        assert!(ObjectKind::BuildInfo.spellings("unknown").is_empty());
    }
}
