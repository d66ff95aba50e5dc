use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use gradlespec_core::ProjectSpec;
use tracing::{debug, warn};

use crate::{get_group_as_file_path, parse_properties, store_properties};

/// Rendered in place of values that are not known at generation time.
pub const NULL_VALUE: &str = "<null>";

/// Operating system the build runs on, named the way the JVM names it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformInfo {
    pub name: Option<String>,
    pub version: Option<String>,
    pub architecture: Option<String>,
}

impl PlatformInfo {
    #[must_use]
    pub fn current() -> Self {
        let name = match std::env::consts::OS {
            "linux" => "Linux",
            "macos" => "Mac OS X",
            "windows" => "Windows",
            "freebsd" => "FreeBSD",
            other => other,
        };
        let architecture = match std::env::consts::ARCH {
            "x86_64" => "amd64",
            "x86" => "x86",
            other => other,
        };
        Self {
            name: Some(name.to_string()),
            version: os_version(),
            architecture: Some(architecture.to_string()),
        }
    }
}

#[cfg(target_os = "linux")]
fn os_version() -> Option<String> {
    std::fs::read_to_string("/proc/sys/kernel/osrelease")
        .ok()
        .map(|release| release.trim().to_string())
        .filter(|release| !release.is_empty())
}

#[cfg(not(target_os = "linux"))]
fn os_version() -> Option<String> {
    None
}

/// Java toolchain the project is built with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toolchain {
    pub vendor: Option<String>,
    pub version: Option<String>,
}

impl Toolchain {
    /// Reads `IMPLEMENTOR` and `JAVA_VERSION` from the `release` file of `JAVA_HOME`.
    pub fn detect(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let Some(java_home) = lookup("JAVA_HOME").filter(|home| !home.trim().is_empty()) else {
            return Self::default();
        };
        Self::from_java_home(Path::new(&java_home))
    }

    #[must_use]
    pub fn from_java_home(java_home: &Path) -> Self {
        let release = java_home.join("release");
        match std::fs::read_to_string(&release) {
            Ok(content) => {
                let properties = parse_properties(&content);
                let field = |key: &str| {
                    properties
                        .get(key)
                        .map(|value| value.trim_matches('"').to_string())
                        .filter(|value| !value.is_empty())
                };
                Self {
                    vendor: field("IMPLEMENTOR"),
                    version: field("JAVA_VERSION"),
                }
            }
            Err(err) => {
                debug!(path = %release.display(), "toolchain release file not readable: {err}");
                Self::default()
            }
        }
    }
}

/// Values written to `build.properties`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub name: Option<String>,
    pub group: Option<String>,
    pub version: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub platform: PlatformInfo,
    pub toolchain: Toolchain,
    /// User supplied entries; base keys win on conflict
    pub extras: BTreeMap<String, String>,
}

impl BuildInfo {
    #[must_use]
    pub fn from_spec(spec: &ProjectSpec, toolchain: Toolchain) -> Self {
        Self {
            name: Some(spec.name.clone()),
            group: Some(spec.group.clone()),
            version: Some(spec.version.clone()),
            timestamp: Utc::now(),
            platform: PlatformInfo::current(),
            toolchain,
            extras: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_extras(mut self, extras: impl IntoIterator<Item = (String, String)>) -> Self {
        self.extras.extend(extras);
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn properties(&self) -> BTreeMap<String, String> {
        let or_null = |value: &Option<String>| value.clone().unwrap_or_else(|| NULL_VALUE.to_string());

        let mut properties = self.extras.clone();
        for (key, value) in [
            ("build.name", or_null(&self.name)),
            ("build.group", or_null(&self.group)),
            ("build.version.name", or_null(&self.version)),
            ("build.timestamp", self.timestamp.timestamp_millis().to_string()),
            ("build.os.name", or_null(&self.platform.name)),
            ("build.os.version", or_null(&self.platform.version)),
            ("build.os.architecture", or_null(&self.platform.architecture)),
            ("build.java.vendor", or_null(&self.toolchain.vendor)),
            ("build.java.version", or_null(&self.toolchain.version)),
        ] {
            properties.insert(key.to_string(), value);
        }
        properties
    }
}

#[derive(Debug, Default)]
pub struct BuildInfoReport {
    pub written: Vec<PathBuf>,
    /// Source sets without a `src/<set>` directory
    pub skipped: Vec<String>,
    pub failed: Vec<(PathBuf, String)>,
}

impl BuildInfoReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Writes the build information into the resources of each source set.
#[derive(Debug, Clone)]
pub struct BuildInfoGenerator {
    project_dir: PathBuf,
    source_sets: Vec<String>,
}

impl BuildInfoGenerator {
    pub fn new(project_dir: impl Into<PathBuf>, source_sets: Vec<String>) -> Self {
        Self {
            project_dir: project_dir.into(),
            source_sets,
        }
    }

    /// `src/<set>/resources/<out package as path>/<filename>`
    #[must_use]
    pub fn output_path(&self, spec: &ProjectSpec, source_set: &str) -> PathBuf {
        self.resources_dir(source_set).join(get_group_as_file_path(
            spec.out_package(),
            spec.build_info_filename(),
        ))
    }

    /// Generates the file for every existing source set. Failures do not stop the other sets.
    pub fn generate(&self, spec: &ProjectSpec, info: &BuildInfo) -> BuildInfoReport {
        let mut report = BuildInfoReport::default();
        let content = store_properties(&info.properties(), info.timestamp);

        for source_set in &self.source_sets {
            if !self.project_dir.join("src").join(source_set).is_dir() {
                debug!(source_set, "source set not present, build info skipped");
                report.skipped.push(source_set.clone());
                continue;
            }

            let path = self.output_path(spec, source_set);
            match crate::generate_file(&path, content.as_bytes()) {
                Ok(()) => {
                    debug!(path = %path.display(), "build info written");
                    report.written.push(path);
                }
                Err(err) => {
                    warn!(path = %path.display(), "failed to write build info: {err:#}");
                    report.failed.push((path, format!("{err:#}")));
                }
            }
        }

        report
    }

    fn resources_dir(&self, source_set: &str) -> PathBuf {
        self.project_dir
            .join("src")
            .join(source_set)
            .join("resources")
    }
}
