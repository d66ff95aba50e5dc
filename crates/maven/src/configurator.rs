use gradlespec_core::{
    Coordinates, ProjectSpec, Publication, PublicationConfigurator, PublicationHost,
    PublicationKind, PublicationSpec, Result, resolve_artifacts, resolve_component,
};
use tracing::debug;

use crate::{pom::MavenPom, publication::MavenPublication};

#[derive(Debug, Default)]
pub struct MavenConfigurator;

impl MavenConfigurator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl PublicationConfigurator for MavenConfigurator {
    fn kind(&self) -> PublicationKind {
        PublicationKind::Maven
    }

    fn configure(
        &self,
        project: &ProjectSpec,
        publication: &PublicationSpec,
        host: &dyn PublicationHost,
    ) -> Result<Box<dyn Publication>> {
        let artifact_id = publication
            .pom
            .as_ref()
            .map_or(project.name.as_str(), |pom| pom.artifact_id.as_str());
        let coordinates = Coordinates::new(&project.group, artifact_id, &project.version);

        let mut diagnostics = Vec::new();
        let component = resolve_component(publication, host, &mut diagnostics);
        let artifacts = resolve_artifacts(publication, host, &mut diagnostics)?;
        let pom = publication.pom.as_ref().map(MavenPom::from_spec);

        debug!(
            publication = %publication.name,
            %coordinates,
            artifacts = artifacts.len(),
            "maven publication configured"
        );
        Ok(Box::new(MavenPublication::new(
            publication.name.clone(),
            coordinates,
            component,
            artifacts,
            pom,
            diagnostics,
        )))
    }
}
