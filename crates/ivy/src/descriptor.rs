use anyhow::Result;
use gradlespec_core::{Coordinates, DeveloperSpec, PomSpec, ProjectSpec};
use gradlespec_utils::XmlDocument;

pub const IVY_VERSION: &str = "2.0";
pub const DEFAULT_STATUS: &str = "integration";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IvyLicense {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
    Text(String),
    List(Vec<String>),
}

/// Generic key/value map of one developer; only present fields are kept.
pub type DeveloperEntry = Vec<(&'static str, MetadataValue)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IvyDescriptor {
    pub description: String,
    pub homepage: String,
    /// Ivy's `<info>` holds a single license
    pub license: Option<IvyLicense>,
    pub organization_name: String,
    pub organization_url: String,
    pub developers: Vec<DeveloperEntry>,
}

impl IvyDescriptor {
    #[must_use]
    pub fn from_spec(project: &ProjectSpec, pom: &PomSpec) -> Self {
        Self {
            description: pom.description.clone(),
            homepage: pom.url.clone(),
            license: pom.licenses.first().map(|license| IvyLicense {
                name: license.name.clone(),
                url: license.value.clone(),
            }),
            organization_name: project.group.clone(),
            organization_url: pom.url.clone(),
            developers: pom
                .developers
                .iter()
                .flatten()
                .map(developer_entry)
                .collect(),
        }
    }
}

fn developer_entry(developer: &DeveloperSpec) -> DeveloperEntry {
    let text = |value: &Option<String>| value.clone().map(MetadataValue::Text);
    [
        ("id", Some(MetadataValue::Text(developer.id.clone()))),
        ("email", text(&developer.email)),
        ("name", text(&developer.name)),
        ("organization", text(&developer.organization)),
        ("organization-url", text(&developer.organization_url)),
        ("roles", developer.roles.clone().map(MetadataValue::List)),
        ("timezone", text(&developer.timezone)),
        ("url", text(&developer.url)),
    ]
    .into_iter()
    .filter_map(|(key, value)| value.map(|value| (key, value)))
    .collect()
}

/// Renders `ivy.xml`. Without a descriptor only the module coordinates are written.
///
/// # Errors
/// Returns error if the XML writer fails.
pub fn render_ivy(coordinates: &Coordinates, descriptor: Option<&IvyDescriptor>) -> Result<String> {
    let mut doc = XmlDocument::new()?;
    doc.start("ivy-module", &[("version", IVY_VERSION)])?;

    let info = [
        ("organisation", coordinates.group.as_str()),
        ("module", coordinates.module.as_str()),
        ("revision", coordinates.version.as_str()),
        ("status", DEFAULT_STATUS),
    ];
    match descriptor {
        None => doc.empty("info", &info)?,
        Some(descriptor) => {
            doc.start("info", &info)?;
            if let Some(license) = &descriptor.license {
                doc.empty(
                    "license",
                    &[("name", license.name.as_str()), ("url", license.url.as_str())],
                )?;
            }
            doc.start("description", &[("homepage", descriptor.homepage.as_str())])?;
            doc.text(&descriptor.description)?;
            doc.end("description")?;
            doc.end("info")?;
            write_metadata(&mut doc, descriptor)?;
        }
    }

    doc.end("ivy-module")?;
    doc.finish()
}

fn write_metadata(doc: &mut XmlDocument, descriptor: &IvyDescriptor) -> Result<()> {
    doc.start("metadata", &[])?;

    doc.start("organization", &[])?;
    doc.text_element("name", &descriptor.organization_name)?;
    doc.text_element("url", &descriptor.organization_url)?;
    doc.end("organization")?;

    if !descriptor.developers.is_empty() {
        doc.start("developers", &[])?;
        for developer in &descriptor.developers {
            doc.start("developer", &[])?;
            for (key, value) in developer {
                match value {
                    MetadataValue::Text(text) => doc.text_element(key, text)?,
                    MetadataValue::List(items) => {
                        doc.start(key, &[])?;
                        for item in items {
                            doc.text_element("role", item)?;
                        }
                        doc.end(key)?;
                    }
                }
            }
            doc.end("developer")?;
        }
        doc.end("developers")?;
    }

    doc.end("metadata")
}
