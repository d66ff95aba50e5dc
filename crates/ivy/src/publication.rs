use gradlespec_core::{
    Coordinates, Diagnostic, Publication, PublicationKind, PublishedArtifact, Result,
    SoftwareComponent, SpecError,
};

use crate::descriptor::{IvyDescriptor, render_ivy};

pub const IVY_FILE_NAME: &str = "ivy.xml";

#[derive(Debug, Clone)]
pub struct IvyPublication {
    name: String,
    coordinates: Coordinates,
    component: Option<SoftwareComponent>,
    descriptor: Option<IvyDescriptor>,
    diagnostics: Vec<Diagnostic>,
}

impl IvyPublication {
    #[must_use]
    pub fn new(
        name: String,
        coordinates: Coordinates,
        component: Option<SoftwareComponent>,
        descriptor: Option<IvyDescriptor>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            name,
            coordinates,
            component,
            descriptor,
            diagnostics,
        }
    }

    #[must_use]
    pub fn descriptor(&self) -> Option<&IvyDescriptor> {
        self.descriptor.as_ref()
    }
}

impl Publication for IvyPublication {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PublicationKind {
        PublicationKind::Ivy
    }

    fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    fn component(&self) -> Option<&SoftwareComponent> {
        self.component.as_ref()
    }

    // artifact tasks are not attached to Ivy publications
    fn artifacts(&self) -> &[PublishedArtifact] {
        &[]
    }

    fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    fn descriptor_file_name(&self) -> &'static str {
        IVY_FILE_NAME
    }

    fn render_descriptor(&self) -> Result<String> {
        render_ivy(&self.coordinates, self.descriptor.as_ref()).map_err(|err| SpecError::Render {
            publication: self.name.clone(),
            descriptor: IVY_FILE_NAME,
            message: format!("{err:#}"),
        })
    }
}
