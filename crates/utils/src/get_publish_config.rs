use std::path::Path;

use anyhow::{Context, Result};
use gradlespec_core::PublishConfig;

/// File next to the specification holding a [`PublishConfig`].
pub const CONFIG_FILE_NAME: &str = ".gradlespec.json";

/// Reads `.gradlespec.json` from `project_dir` (defaults when absent) and takes signing from `lookup`.
///
/// # Errors
/// Returns error if the configuration file exists but cannot be read or parsed.
pub fn get_publish_config(
    project_dir: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<PublishConfig> {
    let config_file = project_dir.join(CONFIG_FILE_NAME);
    let config = if config_file.is_file() {
        let content = std::fs::read_to_string(&config_file)
            .with_context(|| format!("Failed to read {}", config_file.display()))?;
        serde_json::from_str::<PublishConfig>(&content)
            .with_context(|| format!("Failed to parse {}", config_file.display()))?
    } else {
        PublishConfig::default()
    };
    Ok(config.with_signing_from(lookup))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradlespec_core::config::{SIGNING_PASSWORD_ENV, SIGNING_PGP_KEY_ENV};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_get_publish_config_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = get_publish_config(temp_dir.path(), |_| None).unwrap();
        assert_eq!(config, PublishConfig::default());
        temp_dir.close().unwrap();
    }

    #[test]
    fn test_get_publish_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"{"specFile":"lib.gradle.json","sourceSets":["main"]}"#,
        )
        .unwrap();

        let config = get_publish_config(temp_dir.path(), |key| match key {
            SIGNING_PASSWORD_ENV => Some("secret".to_string()),
            SIGNING_PGP_KEY_ENV => Some("key".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.spec_file, "lib.gradle.json");
        assert_eq!(config.source_sets, vec!["main"]);
        assert!(config.signing_enabled());

        temp_dir.close().unwrap();
    }

    #[test]
    fn test_get_publish_config_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "{not json").unwrap();

        let err = get_publish_config(temp_dir.path(), |_| None).unwrap_err();
        assert!(err.to_string().contains(CONFIG_FILE_NAME));

        temp_dir.close().unwrap();
    }
}
