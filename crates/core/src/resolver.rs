use tracing::{debug, info, warn};

use crate::{
    Diagnostic, ProjectSpec, PublishConfig,
    decode::{decode_developers, decode_project},
    developer_spec::Developers,
    error::{Result, SpecError},
    project_fs::ProjectFs,
    validate::{ValidationError, validate_spec},
};

/// A specification with every developer reference replaced by its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub spec: ProjectSpec,
    pub diagnostics: Vec<Diagnostic>,
}

/// Reads the root specification of a project directory and resolves its references.
#[derive(Debug)]
pub struct Resolver<'a> {
    fs: &'a dyn ProjectFs,
    config: &'a PublishConfig,
}

impl<'a> Resolver<'a> {
    pub fn new(fs: &'a dyn ProjectFs, config: &'a PublishConfig) -> Self {
        Self { fs, config }
    }

    /// # Errors
    /// Returns error if the specification is missing, cannot be decoded or fails validation.
    pub fn resolve(&self) -> Result<Resolved> {
        let file = self.config.spec_file.as_str();
        if !self.fs.contains(file)? {
            return Err(SpecError::SpecificationNotFound {
                file: file.to_string(),
                location: self.fs.location(),
            });
        }

        let bytes = self.fs.read(file)?;
        let spec = decode_project(file, &bytes)?;
        debug!(project = %spec.name, publications = spec.publications.len(), "specification decoded");

        let (fatal, warnings): (Vec<_>, Vec<_>) = validate_spec(&spec)
            .into_iter()
            .partition(ValidationError::is_fatal);
        if !fatal.is_empty() {
            return Err(SpecError::Validation(fatal));
        }

        let (spec, mut diagnostics) = update_refs(&spec, self.fs);
        let mut all = warnings
            .iter()
            .map(|warning| Diagnostic::warning(file, warning.to_string()))
            .collect::<Vec<_>>();
        all.append(&mut diagnostics);

        info!(project = %spec.name, "specification resolved");
        Ok(Resolved {
            spec,
            diagnostics: all,
        })
    }
}

/// Returns a copy of `spec` whose `developersRef` entries are loaded from sibling files.
///
/// The input is left untouched. A reference that cannot be loaded leaves that
/// publication without developers and adds a warning; other publications are
/// unaffected.
pub fn update_refs(spec: &ProjectSpec, fs: &dyn ProjectFs) -> (ProjectSpec, Vec<Diagnostic>) {
    let mut resolved = spec.clone();
    let mut diagnostics = Vec::new();

    for publication in &mut resolved.publications {
        let Some(pom) = publication.pom.as_mut() else {
            continue;
        };
        let Some(reference) = pom.developers_ref.as_deref() else {
            continue;
        };

        match load_developers(fs, reference) {
            Ok(developers) => {
                debug!(publication = %publication.name, reference, count = developers.len(), "developers loaded");
                pom.developers = Some(developers);
            }
            Err(err) => {
                warn!(publication = %publication.name, reference, "developers not loaded: {err}");
                diagnostics.push(Diagnostic::warning(
                    &publication.name,
                    format!("developers from \"{reference}\" not loaded: {err}"),
                ));
                pom.developers = None;
            }
        }
    }

    (resolved, diagnostics)
}

fn load_developers(fs: &dyn ProjectFs, reference: &str) -> Result<Developers> {
    if !fs.contains(reference)? {
        return Err(SpecError::SpecificationNotFound {
            file: reference.to_string(),
            location: fs.location(),
        });
    }
    let bytes = fs.read(reference)?;
    Ok(decode_developers(reference, &bytes)?)
}
