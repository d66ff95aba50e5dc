use std::{collections::BTreeMap, path::PathBuf};

use gradlespec_core::{PublicationHost, PublishedArtifact, SoftwareComponent};

/// Host built from command-line arguments: the named components and `TASK=PATH` outputs.
#[derive(Debug, Clone, Default)]
pub struct LocalHost {
    components: Vec<String>,
    artifacts: BTreeMap<String, PathBuf>,
}

impl LocalHost {
    #[must_use]
    pub fn new(
        components: impl IntoIterator<Item = String>,
        artifacts: impl IntoIterator<Item = (String, PathBuf)>,
    ) -> Self {
        Self {
            components: components.into_iter().collect(),
            artifacts: artifacts.into_iter().collect(),
        }
    }
}

impl PublicationHost for LocalHost {
    fn find_component(&self, name: &str) -> Option<SoftwareComponent> {
        self.components
            .iter()
            .any(|component| component == name)
            .then(|| SoftwareComponent::new(name))
    }

    fn find_artifact(&self, task_name: &str) -> Option<PublishedArtifact> {
        self.artifacts
            .get(task_name)
            .map(|file| PublishedArtifact::new(task_name, file.clone()))
    }
}
