use gradlespec_core::{
    Coordinates, ProjectSpec, Publication, PublicationConfigurator, PublicationHost,
    PublicationKind, PublicationSpec, Result, resolve_component,
};
use tracing::debug;

use crate::{descriptor::IvyDescriptor, publication::IvyPublication};

#[derive(Debug, Default)]
pub struct IvyConfigurator;

impl IvyConfigurator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PublicationConfigurator for IvyConfigurator {
    fn kind(&self) -> PublicationKind {
        PublicationKind::Ivy
    }

    /// Module name is the project name; declared artifacts are ignored.
    fn configure(
        &self,
        project: &ProjectSpec,
        publication: &PublicationSpec,
        host: &dyn PublicationHost,
    ) -> Result<Box<dyn Publication>> {
        let coordinates = Coordinates::new(&project.group, &project.name, &project.version);

        let mut diagnostics = Vec::new();
        let component = resolve_component(publication, host, &mut diagnostics);
        let descriptor = publication
            .pom
            .as_ref()
            .map(|pom| IvyDescriptor::from_spec(project, pom));

        if !publication.artifacts.is_empty() {
            debug!(
                publication = %publication.name,
                count = publication.artifacts.len(),
                "artifact tasks are not attached to ivy publications"
            );
        }
        debug!(publication = %publication.name, %coordinates, "ivy publication configured");
        Ok(Box::new(IvyPublication::new(
            publication.name.clone(),
            coordinates,
            component,
            descriptor,
            diagnostics,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradlespec_core::{PublishedArtifact, SoftwareComponent, decode_project};

    #[derive(Debug)]
    struct JavaOnlyHost;

    impl PublicationHost for JavaOnlyHost {
        fn find_component(&self, name: &str) -> Option<SoftwareComponent> {
            (name == "java").then(|| SoftwareComponent::new(name))
        }

        fn find_artifact(&self, _task_name: &str) -> Option<PublishedArtifact> {
            None
        }
    }

    const DOCUMENT: &str = r#"{
        "name": "lib", "version": "1.0.0", "group": "org.acme", "package": "org.acme.lib",
        "publications": [
            {
                "type": "IVY", "name": "internal", "component": "java",
                "artifacts": [{"task": "javadocJar", "required": true}],
                "pom": {
                    "url": "https://acme.org", "description": "Acme library", "artifactId": "lib",
                    "licenses": [
                        {"name": "MIT", "value": "https://opensource.org/licenses/MIT"},
                        {"name": "Apache-2.0", "value": "https://www.apache.org/licenses/LICENSE-2.0"}
                    ],
                    "developers": [{"id": "jdoe", "time-zone": "UTC"}]
                }
            },
            {"type": "ivy", "name": "bare", "component": "web"}
        ]
    }"#;

    #[test]
    fn test_configure_ivy_publication() {
        let spec = decode_project("project.gradle.json", DOCUMENT.as_bytes()).unwrap();
        let configured = IvyConfigurator::new()
            .configure(&spec, &spec.publications[0], &JavaOnlyHost)
            .unwrap();

        assert_eq!(configured.kind(), PublicationKind::Ivy);
        assert_eq!(configured.coordinates().to_string(), "org.acme:lib:1.0.0");
        assert!(configured.component().is_some());
        // required artifacts are not checked for Ivy
        assert!(configured.artifacts().is_empty());
        assert!(configured.diagnostics().is_empty());
        assert_eq!(configured.descriptor_file_name(), "ivy.xml");

        let xml = configured.render_descriptor().unwrap();
        assert_eq!(xml.matches("<license ").count(), 1);
        assert!(xml.contains("<timezone>UTC</timezone>"));
    }

    #[test]
    fn test_configure_without_pom() {
        let spec = decode_project("project.gradle.json", DOCUMENT.as_bytes()).unwrap();
        let configured = IvyConfigurator::new()
            .configure(&spec, &spec.publications[1], &JavaOnlyHost)
            .unwrap();

        assert!(configured.component().is_none());
        assert_eq!(configured.diagnostics().len(), 1);
        let xml = configured.render_descriptor().unwrap();
        assert!(!xml.contains("<metadata>"));
    }
}
