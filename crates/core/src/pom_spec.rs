use serde::{Deserialize, Serialize};

use crate::developer_spec::Developers;

/// Descriptive metadata shared by the Maven POM and the Ivy descriptor.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PomSpec {
    pub url: String,
    pub description: String,
    pub artifact_id: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<LicenseSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developers: Option<Developers>,

    /// Sibling file holding the developer list; resolved into `developers`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developers_ref: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scm: Option<ScmSpec>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LicenseSpec {
    pub name: String,
    /// License URL
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScmSpec {
    pub url: String,
    pub branch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_connection: Option<String>,
}
