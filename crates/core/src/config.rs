use serde::{Deserialize, Serialize};

pub const SIGNING_USER_ID_ENV: &str = "SIGNING_USER_ID";
pub const SIGNING_PASSWORD_ENV: &str = "SIGNING_PASSWORD";
pub const SIGNING_PGP_KEY_ENV: &str = "SIGNING_PGP_KEY";

/// Loaded from `.gradlespec.json` next to the specification, with signing taken from the environment.
///
/// Built once per invocation and handed to the resolver and the publication
/// configurators; nothing reads the environment after construction.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublishConfig {
    /// Name of the root specification file (default: "project.gradle.json")
    #[serde(default = "default_spec_file")]
    pub spec_file: String,

    /// Source sets that receive the generated build information
    #[serde(default = "default_source_sets")]
    pub source_sets: Vec<String>,

    /// In-memory PGP signing keys, never read from the config file
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub signing: Option<SigningConfig>,
}

fn default_spec_file() -> String {
    "project.gradle.json".to_string()
}

fn default_source_sets() -> Vec<String> {
    vec!["main".to_string(), "test".to_string()]
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            spec_file: default_spec_file(),
            source_sets: default_source_sets(),
            signing: None,
        }
    }
}

impl PublishConfig {
    /// Replaces the signing configuration with what `lookup` provides.
    #[must_use]
    pub fn with_signing_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        self.signing = SigningConfig::from_lookup(lookup);
        self
    }

    /// Default configuration with signing taken from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_signing_from(|key| std::env::var(key).ok())
    }

    #[must_use]
    pub fn signing_enabled(&self) -> bool {
        self.signing.as_ref().is_some_and(SigningConfig::is_complete)
    }
}

/// Keys for `useInMemoryPgpKeys`-style signing. Secrets are never serialized.
#[derive(Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SigningConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip)]
    pub password: Option<String>,
    #[serde(skip)]
    pub key: Option<String>,
}

impl SigningConfig {
    /// `None` when none of the signing variables is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let config = Self {
            user_id: non_empty(SIGNING_USER_ID_ENV),
            password: non_empty(SIGNING_PASSWORD_ENV),
            key: non_empty(SIGNING_PGP_KEY_ENV),
        };
        if config.user_id.is_none() && config.password.is_none() && config.key.is_none() {
            None
        } else {
            Some(config)
        }
    }

    /// A key and its password are both needed to sign.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.key.is_some() && self.password.is_some()
    }
}

impl std::fmt::Debug for SigningConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningConfig")
            .field("user_id", &self.user_id)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
