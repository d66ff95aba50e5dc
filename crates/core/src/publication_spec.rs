use serde::{Deserialize, Serialize};

use crate::{PublicationKind, pom_spec::PomSpec};

/// One entry of the `publications` list.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublicationSpec {
    /// Free-text publication format, see [`PublicationKind::parse`]
    pub r#type: String,
    pub name: String,
    /// Host software component attached to the publication (e.g. `java`)
    pub component: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<ArtifactSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pom: Option<PomSpec>,
}

impl PublicationSpec {
    #[must_use]
    pub fn kind(&self) -> PublicationKind {
        PublicationKind::parse(&self.r#type)
    }
}

/// Task whose output is attached to a publication.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactSpec {
    pub task_name: String,
    /// A missing required task aborts the publication setup, a missing optional one is skipped
    #[serde(default)]
    pub required: bool,
}

impl ArtifactSpec {
    #[must_use]
    pub fn new(task_name: &str, required: bool) -> Self {
        Self {
            task_name: task_name.to_string(),
            required,
        }
    }
}
