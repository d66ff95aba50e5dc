use serde::{Deserialize, Serialize};

use crate::publication_spec::PublicationSpec;

/// File name used for generated build information when the document does not name one.
pub const DEFAULT_BUILD_INFO_FILENAME: &str = "build.properties";

/// Root of a `project.gradle.json` document.
///
/// Coordinates (`group`, `version`) are consumed by every publication, the
/// remaining fields feed the generated build information.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSpec {
    pub name: String,
    pub version: String,
    pub group: String,
    pub package_name: String,

    /// Where and how `build.properties` is generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_info: Option<BuildInfoSpec>,

    /// Publications in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub publications: Vec<PublicationSpec>,
}

impl ProjectSpec {
    #[must_use]
    pub fn new(name: &str, version: &str, group: &str, package_name: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            group: group.to_string(),
            package_name: package_name.to_string(),
            build_info: None,
            publications: Vec::new(),
        }
    }

    /// Output package of the build information, if configured.
    #[must_use]
    pub fn out_package(&self) -> Option<&str> {
        self.build_info.as_ref().map(|info| info.out_package.as_str())
    }

    /// File name of the build information, falling back to `build.properties`.
    #[must_use]
    pub fn build_info_filename(&self) -> &str {
        self.build_info
            .as_ref()
            .map_or(DEFAULT_BUILD_INFO_FILENAME, |info| info.filename.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfoSpec {
    /// Package the resource is generated into (`org.acme.lib` → `org/acme/lib`)
    pub out_package: String,

    #[serde(default = "default_filename")]
    pub filename: String,
}

fn default_filename() -> String {
    DEFAULT_BUILD_INFO_FILENAME.to_string()
}
