use std::{collections::HashSet, fmt::Display};

use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    Diagnostic, ProjectSpec, PublicationKind, PublishConfig,
    error::{Result, SpecError},
    host::{PublicationHost, PublishedArtifact, SoftwareComponent},
    publication_spec::PublicationSpec,
};

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Coordinates {
    pub group: String,
    pub module: String,
    pub version: String,
}

impl Coordinates {
    pub fn new(
        group: impl Into<String>,
        module: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            module: module.into(),
            version: version.into(),
        }
    }
}

impl Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.module, self.version)
    }
}

/// A configured publication, ready to be handed to the host.
pub trait Publication: std::fmt::Debug {
    fn name(&self) -> &str;
    fn kind(&self) -> PublicationKind;
    fn coordinates(&self) -> &Coordinates;
    fn component(&self) -> Option<&SoftwareComponent>;
    fn artifacts(&self) -> &[PublishedArtifact];
    /// Non-fatal findings collected while configuring
    fn diagnostics(&self) -> &[Diagnostic];
    /// File name of the metadata descriptor (`pom.xml`, `ivy.xml`)
    fn descriptor_file_name(&self) -> &'static str;
    /// # Errors
    /// Returns error if the descriptor cannot be written.
    fn render_descriptor(&self) -> Result<String>;
}

/// Maps a [`PublicationSpec`] onto one publication format.
pub trait PublicationConfigurator: std::fmt::Debug {
    fn kind(&self) -> PublicationKind;
    /// # Errors
    /// Returns error if a required artifact task is missing.
    fn configure(
        &self,
        project: &ProjectSpec,
        publication: &PublicationSpec,
        host: &dyn PublicationHost,
    ) -> Result<Box<dyn Publication>>;
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", tag = "reason", content = "detail")]
pub enum SkipReason {
    /// `type` did not name a known format
    UnknownKind(String),
    /// An earlier publication already uses the name
    DuplicateName,
    /// No configurator registered for the format
    NoConfigurator(PublicationKind),
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownKind(value) => write!(f, "unknown publication type \"{value}\""),
            Self::DuplicateName => write!(f, "duplicate publication name"),
            Self::NoConfigurator(kind) => write!(f, "no configurator for {}", kind.key()),
        }
    }
}

#[derive(Debug)]
pub enum PublicationOutcome {
    Configured {
        publication: Box<dyn Publication>,
        /// Whether the host should sign this publication
        signed: bool,
    },
    Skipped {
        name: String,
        reason: SkipReason,
    },
}

impl PublicationOutcome {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Configured { publication, .. } => publication.name(),
            Self::Skipped { name, .. } => name,
        }
    }
}

/// Configures every publication of `project` with the matching configurator.
///
/// Unknown formats and duplicate names are skipped, everything else is handed
/// to its configurator in declaration order.
///
/// # Errors
/// Returns error if any configurator fails (e.g. a required artifact is missing).
pub fn configure_publications(
    project: &ProjectSpec,
    host: &dyn PublicationHost,
    configurators: &[Box<dyn PublicationConfigurator>],
    config: &PublishConfig,
) -> Result<Vec<PublicationOutcome>> {
    let signed = config.signing_enabled();
    let mut seen = HashSet::new();
    let mut outcomes = Vec::with_capacity(project.publications.len());

    for publication in &project.publications {
        let reason = match publication.kind() {
            _ if !seen.insert(publication.name.as_str()) => Some(SkipReason::DuplicateName),
            PublicationKind::Unknown => Some(SkipReason::UnknownKind(publication.r#type.clone())),
            kind => match configurators.iter().find(|c| c.kind() == kind) {
                Some(configurator) => {
                    let configured = configurator.configure(project, publication, host)?;
                    outcomes.push(PublicationOutcome::Configured {
                        publication: configured,
                        signed,
                    });
                    None
                }
                None => Some(SkipReason::NoConfigurator(kind)),
            },
        };

        if let Some(reason) = reason {
            debug!(publication = %publication.name, %reason, "publication skipped");
            outcomes.push(PublicationOutcome::Skipped {
                name: publication.name.clone(),
                reason,
            });
        }
    }

    Ok(outcomes)
}

/// Looks up the publication's component; a missing one is reported, not fatal.
pub fn resolve_component(
    publication: &PublicationSpec,
    host: &dyn PublicationHost,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<SoftwareComponent> {
    let component = host.find_component(&publication.component);
    if component.is_none() {
        debug!(publication = %publication.name, component = %publication.component, "component not found");
        diagnostics.push(Diagnostic::info(
            &publication.name,
            format!("Component \"{}\" not found", publication.component),
        ));
    }
    component
}

/// Looks up the output of every artifact task.
///
/// # Errors
/// Returns [`SpecError::MissingRequiredArtifact`] for a missing required task.
pub fn resolve_artifacts(
    publication: &PublicationSpec,
    host: &dyn PublicationHost,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<PublishedArtifact>> {
    let mut artifacts = Vec::with_capacity(publication.artifacts.len());
    for artifact in &publication.artifacts {
        match host.find_artifact(&artifact.task_name) {
            Some(found) => artifacts.push(found),
            None if artifact.required => {
                return Err(SpecError::MissingRequiredArtifact {
                    task: artifact.task_name.clone(),
                    publication: publication.name.clone(),
                });
            }
            None => {
                warn!(publication = %publication.name, task = %artifact.task_name, "artifact not found");
                diagnostics.push(Diagnostic::warning(
                    &publication.name,
                    format!("Artifact \"{}\" not found", artifact.task_name),
                ));
            }
        }
    }
    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Severity, publication_spec::ArtifactSpec};
    use std::collections::HashMap;

    #[derive(Debug, Default)]
    struct MockHost {
        components: Vec<String>,
        artifacts: HashMap<String, String>,
    }

    impl PublicationHost for MockHost {
        fn find_component(&self, name: &str) -> Option<SoftwareComponent> {
            self.components
                .iter()
                .find(|c| *c == name)
                .map(|c| SoftwareComponent::new(c.as_str()))
        }

        fn find_artifact(&self, task_name: &str) -> Option<PublishedArtifact> {
            self.artifacts
                .get(task_name)
                .map(|file| PublishedArtifact::new(task_name, file))
        }
    }

    #[derive(Debug)]
    struct MockPublication {
        name: String,
        kind: PublicationKind,
        coordinates: Coordinates,
    }

    impl Publication for MockPublication {
        fn name(&self) -> &str {
            &self.name
        }
        fn kind(&self) -> PublicationKind {
            self.kind
        }
        fn coordinates(&self) -> &Coordinates {
            &self.coordinates
        }
        fn component(&self) -> Option<&SoftwareComponent> {
            None
        }
        fn artifacts(&self) -> &[PublishedArtifact] {
            &[]
        }
        fn diagnostics(&self) -> &[Diagnostic] {
            &[]
        }
        fn descriptor_file_name(&self) -> &'static str {
            "mock.xml"
        }
        fn render_descriptor(&self) -> Result<String> {
            Ok(String::new())
        }
    }

    #[derive(Debug)]
    struct MockConfigurator(PublicationKind);

    impl PublicationConfigurator for MockConfigurator {
        fn kind(&self) -> PublicationKind {
            self.0
        }

        fn configure(
            &self,
            project: &ProjectSpec,
            publication: &PublicationSpec,
            host: &dyn PublicationHost,
        ) -> Result<Box<dyn Publication>> {
            let mut diagnostics = Vec::new();
            resolve_artifacts(publication, host, &mut diagnostics)?;
            Ok(Box::new(MockPublication {
                name: publication.name.clone(),
                kind: self.0,
                coordinates: Coordinates::new(&project.group, &project.name, &project.version),
            }))
        }
    }

    fn publication(r#type: &str, name: &str) -> PublicationSpec {
        PublicationSpec {
            r#type: r#type.to_string(),
            name: name.to_string(),
            component: "java".to_string(),
            artifacts: Vec::new(),
            pom: None,
        }
    }

    fn configurators() -> Vec<Box<dyn PublicationConfigurator>> {
        vec![
            Box::new(MockConfigurator(PublicationKind::Maven)),
            Box::new(MockConfigurator(PublicationKind::Ivy)),
        ]
    }

    #[test]
    fn test_configure_dispatches_case_insensitively() {
        let mut project = ProjectSpec::new("lib", "1.0.0", "org.acme", "org.acme.lib");
        project.publications.push(publication("MAVEN", "upper"));
        project.publications.push(publication("maven", "lower"));
        project.publications.push(publication("Ivy", "ivy"));

        let outcomes = configure_publications(
            &project,
            &MockHost::default(),
            &configurators(),
            &PublishConfig::default(),
        )
        .unwrap();

        let kinds: Vec<_> = outcomes
            .iter()
            .map(|outcome| match outcome {
                PublicationOutcome::Configured { publication, .. } => publication.kind(),
                PublicationOutcome::Skipped { .. } => PublicationKind::Unknown,
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                PublicationKind::Maven,
                PublicationKind::Maven,
                PublicationKind::Ivy
            ]
        );
    }

    #[test]
    fn test_configure_skips_unknown_kind() {
        let mut project = ProjectSpec::new("lib", "1.0.0", "org.acme", "org.acme.lib");
        project.publications.push(publication("npm", "web"));
        project.publications.push(publication("maven", "release"));

        let outcomes = configure_publications(
            &project,
            &MockHost::default(),
            &configurators(),
            &PublishConfig::default(),
        )
        .unwrap();

        assert_eq!(outcomes.len(), 2);
        assert!(matches!(
            &outcomes[0],
            PublicationOutcome::Skipped { name, reason: SkipReason::UnknownKind(t) }
                if name == "web" && t == "npm"
        ));
        assert_eq!(outcomes[1].name(), "release");
    }

    #[test]
    fn test_configure_skips_duplicate_name() {
        let mut project = ProjectSpec::new("lib", "1.0.0", "org.acme", "org.acme.lib");
        project.publications.push(publication("maven", "release"));
        project.publications.push(publication("ivy", "release"));

        let outcomes = configure_publications(
            &project,
            &MockHost::default(),
            &configurators(),
            &PublishConfig::default(),
        )
        .unwrap();

        assert!(matches!(
            &outcomes[1],
            PublicationOutcome::Skipped {
                reason: SkipReason::DuplicateName,
                ..
            }
        ));
    }

    #[test]
    fn test_configure_without_configurator() {
        let mut project = ProjectSpec::new("lib", "1.0.0", "org.acme", "org.acme.lib");
        project.publications.push(publication("ivy", "ivy"));
        let only_maven: Vec<Box<dyn PublicationConfigurator>> =
            vec![Box::new(MockConfigurator(PublicationKind::Maven))];

        let outcomes = configure_publications(
            &project,
            &MockHost::default(),
            &only_maven,
            &PublishConfig::default(),
        )
        .unwrap();

        assert!(matches!(
            &outcomes[0],
            PublicationOutcome::Skipped {
                reason: SkipReason::NoConfigurator(PublicationKind::Ivy),
                ..
            }
        ));
    }

    #[test]
    fn test_configure_marks_signed_publications() {
        let mut project = ProjectSpec::new("lib", "1.0.0", "org.acme", "org.acme.lib");
        project.publications.push(publication("maven", "release"));
        let config = PublishConfig::default().with_signing_from(|key| match key {
            crate::config::SIGNING_PASSWORD_ENV => Some("secret".to_string()),
            crate::config::SIGNING_PGP_KEY_ENV => Some("key".to_string()),
            _ => None,
        });

        let outcomes =
            configure_publications(&project, &MockHost::default(), &configurators(), &config)
                .unwrap();
        assert!(matches!(
            &outcomes[0],
            PublicationOutcome::Configured { signed: true, .. }
        ));
    }

    #[test]
    fn test_required_artifact_missing_aborts() {
        let mut project = ProjectSpec::new("lib", "1.0.0", "org.acme", "org.acme.lib");
        let mut release = publication("maven", "release");
        release.artifacts.push(ArtifactSpec::new("javadocJar", true));
        project.publications.push(release);

        let err = configure_publications(
            &project,
            &MockHost::default(),
            &configurators(),
            &PublishConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SpecError::MissingRequiredArtifact { ref task, ref publication }
                if task == "javadocJar" && publication == "release"
        ));
    }

    #[test]
    fn test_resolve_artifacts_optional_missing_is_warning() {
        let mut release = publication("maven", "release");
        release.artifacts.push(ArtifactSpec::new("javadocJar", true));
        release.artifacts.push(ArtifactSpec::new("sourceJar", false));
        let host = MockHost {
            components: vec![],
            artifacts: HashMap::from([(
                "javadocJar".to_string(),
                "build/libs/lib-javadoc.jar".to_string(),
            )]),
        };

        let mut diagnostics = Vec::new();
        let artifacts = resolve_artifacts(&release, &host, &mut diagnostics).unwrap();
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].task_name, "javadocJar");
        assert_eq!(artifacts[0].extension(), Some("jar"));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert!(diagnostics[0].message.contains("sourceJar"));
    }

    #[test]
    fn test_resolve_component() {
        let release = publication("maven", "release");
        let host = MockHost {
            components: vec!["java".to_string()],
            artifacts: HashMap::new(),
        };
        let mut diagnostics = Vec::new();
        assert_eq!(
            resolve_component(&release, &host, &mut diagnostics),
            Some(SoftwareComponent::new("java"))
        );
        assert!(diagnostics.is_empty());

        assert_eq!(
            resolve_component(&release, &MockHost::default(), &mut diagnostics),
            None
        );
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_coordinates_display() {
        let coordinates = Coordinates::new("org.acme", "lib", "1.0.0");
        assert_eq!(coordinates.to_string(), "org.acme:lib:1.0.0");
    }
}
