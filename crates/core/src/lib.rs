pub mod alias;
pub mod config;
pub mod decode;
pub mod developer_spec;
pub mod diagnostic;
pub mod error;
pub mod host;
pub mod pom_spec;
pub mod project_fs;
pub mod project_spec;
pub mod publication;
pub mod publication_kind;
pub mod publication_spec;
pub mod resolver;
pub mod validate;

// Re-export the model and the entry points for convenience
pub use config::{PublishConfig, SigningConfig};
pub use decode::{decode_developers, decode_project, encode_project};
pub use developer_spec::{DeveloperSpec, Developers};
pub use diagnostic::{Diagnostic, Severity};
pub use error::{DecodeError, Result, SpecError};
pub use host::{PublicationHost, PublishedArtifact, SoftwareComponent};
pub use pom_spec::{LicenseSpec, PomSpec, ScmSpec};
pub use project_fs::{LocalProjectFs, ProjectFs};
pub use project_spec::{BuildInfoSpec, DEFAULT_BUILD_INFO_FILENAME, ProjectSpec};
pub use publication::{
    Coordinates, Publication, PublicationConfigurator, PublicationOutcome, SkipReason,
    configure_publications, resolve_artifacts, resolve_component,
};
pub use publication_kind::PublicationKind;
pub use publication_spec::{ArtifactSpec, PublicationSpec};
pub use resolver::{Resolved, Resolver, update_refs};
pub use validate::{ValidationError, validate_spec};
