use gradlespec_core::{
    Coordinates, Diagnostic, Publication, PublicationKind, PublishedArtifact, Result, SoftwareComponent,
    SpecError,
};

use crate::pom::{MavenPom, render_pom};

pub const POM_FILE_NAME: &str = "pom.xml";

#[derive(Debug, Clone)]
pub struct MavenPublication {
    name: String,
    coordinates: Coordinates,
    component: Option<SoftwareComponent>,
    artifacts: Vec<PublishedArtifact>,
    pom: Option<MavenPom>,
    diagnostics: Vec<Diagnostic>,
}

impl MavenPublication {
    #[must_use]
    pub fn new(
        name: String,
        coordinates: Coordinates,
        component: Option<SoftwareComponent>,
        artifacts: Vec<PublishedArtifact>,
        pom: Option<MavenPom>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            name,
            coordinates,
            component,
            artifacts,
            pom,
            diagnostics,
        }
    }

    #[must_use]
    pub fn pom(&self) -> Option<&MavenPom> {
        self.pom.as_ref()
    }
}

impl Publication for MavenPublication {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PublicationKind {
        PublicationKind::Maven
    }

    fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    fn component(&self) -> Option<&SoftwareComponent> {
        self.component.as_ref()
    }

    fn artifacts(&self) -> &[PublishedArtifact] {
        &self.artifacts
    }

    fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    fn descriptor_file_name(&self) -> &'static str {
        POM_FILE_NAME
    }

    fn render_descriptor(&self) -> Result<String> {
        render_pom(&self.coordinates, self.pom.as_ref()).map_err(|err| SpecError::Render {
            publication: self.name.clone(),
            descriptor: POM_FILE_NAME,
            message: format!("{err:#}"),
        })
    }
}
