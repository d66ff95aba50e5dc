use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperSpec {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl DeveloperSpec {
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: None,
            email: None,
            organization: None,
            organization_url: None,
            roles: None,
            timezone: None,
            url: None,
        }
    }
}

/// Developer set keyed by `id`.
///
/// Keeps declaration order; a later entry reusing an `id` is dropped.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Developers(Vec<DeveloperSpec>);

impl Developers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when a developer with the same `id` is already present.
    pub fn insert(&mut self, developer: DeveloperSpec) -> bool {
        if self.get(&developer.id).is_some() {
            return false;
        }
        self.0.push(developer);
        true
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&DeveloperSpec> {
        self.0.iter().find(|developer| developer.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DeveloperSpec> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<DeveloperSpec> for Developers {
    fn from_iter<T: IntoIterator<Item = DeveloperSpec>>(iter: T) -> Self {
        let mut developers = Self::new();
        for developer in iter {
            let id = developer.id.clone();
            if !developers.insert(developer) {
                warn!(developer = %id, "duplicate developer id, keeping the first entry");
            }
        }
        developers
    }
}

impl<'a> IntoIterator for &'a Developers {
    type Item = &'a DeveloperSpec;
    type IntoIter = std::slice::Iter<'a, DeveloperSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'de> Deserialize<'de> for Developers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<DeveloperSpec>::deserialize(deserializer).map(|list| list.into_iter().collect())
    }
}
