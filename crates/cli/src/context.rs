use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gradlespec_core::{Diagnostic, LocalProjectFs, PublishConfig, Resolved, Resolver};
use gradlespec_utils::get_publish_config;

pub struct CommandContext {
    pub project_dir: PathBuf,
    pub config: PublishConfig,
}

impl CommandContext {
    /// # Errors
    /// Returns error if the current directory is unavailable or the configuration is invalid.
    pub fn new(project_dir: Option<PathBuf>) -> Result<Self> {
        let project_dir = match project_dir {
            Some(dir) => dir,
            None => Self::current_dir()?,
        };
        let config = get_publish_config(&project_dir, |key| std::env::var(key).ok())?;
        Ok(Self {
            project_dir,
            config,
        })
    }

    /// # Errors
    /// Returns error if retrieving the current directory fails.
    pub fn current_dir() -> Result<PathBuf> {
        Ok(std::env::current_dir()?)
    }

    /// Resolves the project specification of the project directory.
    ///
    /// # Errors
    /// Returns error if the specification is missing or invalid.
    pub fn resolve(&self) -> Result<Resolved> {
        let fs = LocalProjectFs::new(&self.project_dir);
        Resolver::new(&fs, &self.config)
            .resolve()
            .with_context(|| format!("Failed to resolve {}", self.project_dir.display()))
    }

    /// Paths given on the command line are relative to the project directory.
    #[must_use]
    pub fn project_path(&self, path: &Path) -> PathBuf {
        self.project_dir.join(path)
    }
}

pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("{diagnostic}");
    }
}
