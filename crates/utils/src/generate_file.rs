use std::{fs, path::Path};

use anyhow::{Context, Result};

/// Writes `content` to `path`, creating missing parent directories.
///
/// An existing file is truncated.
pub fn generate_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
