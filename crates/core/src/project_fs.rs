use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Read-only view of a project directory, one level deep.
///
/// The resolver only ever asks for files directly inside the project
/// directory, so implementations never need to recurse.
pub trait ProjectFs: std::fmt::Debug {
    /// Human-readable location used in error messages
    fn location(&self) -> String;
    /// # Errors
    /// Returns error if the directory cannot be listed.
    fn list_files(&self) -> io::Result<Vec<String>>;
    /// # Errors
    /// Returns error if the file cannot be read.
    fn read(&self, file_name: &str) -> io::Result<Vec<u8>>;

    /// # Errors
    /// Returns error if the directory cannot be listed.
    fn contains(&self, file_name: &str) -> io::Result<bool> {
        Ok(self.list_files()?.iter().any(|name| name == file_name))
    }
}

#[derive(Debug, Clone)]
pub struct LocalProjectFs {
    root: PathBuf,
}

impl LocalProjectFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ProjectFs for LocalProjectFs {
    fn location(&self) -> String {
        self.root.display().to_string()
    }

    fn list_files(&self) -> io::Result<Vec<String>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                files.push(name.to_string());
            }
        }
        files.sort();
        Ok(files)
    }

    fn read(&self, file_name: &str) -> io::Result<Vec<u8>> {
        fs::read(self.root.join(file_name))
    }
}
