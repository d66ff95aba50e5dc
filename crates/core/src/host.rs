use serde::Serialize;
use std::path::PathBuf;

/// Software component provided by the host build (e.g. `java`).
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SoftwareComponent {
    pub name: String,
}

impl SoftwareComponent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Output of a host task attached to a publication.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublishedArtifact {
    pub task_name: String,
    pub file: PathBuf,
}

impl PublishedArtifact {
    pub fn new(task_name: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            task_name: task_name.into(),
            file: file.into(),
        }
    }

    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.file.extension().and_then(|ext| ext.to_str())
    }
}

/// What the host build tool exposes to the publication configurators.
pub trait PublicationHost: std::fmt::Debug {
    fn find_component(&self, name: &str) -> Option<SoftwareComponent>;
    fn find_artifact(&self, task_name: &str) -> Option<PublishedArtifact>;
}
