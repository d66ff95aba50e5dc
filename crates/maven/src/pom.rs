use anyhow::Result;
use gradlespec_core::{Coordinates, DeveloperSpec, PomSpec};
use gradlespec_utils::XmlDocument;

const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const POM_SCHEMA_LOCATION: &str =
    "http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd";
pub const MODEL_VERSION: &str = "4.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomLicense {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomDeveloper {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
    pub organization: Option<String>,
    pub organization_url: Option<String>,
    pub roles: Vec<String>,
    pub timezone: Option<String>,
}

impl From<&DeveloperSpec> for PomDeveloper {
    fn from(spec: &DeveloperSpec) -> Self {
        Self {
            id: spec.id.clone(),
            name: spec.name.clone(),
            email: spec.email.clone(),
            url: spec.url.clone(),
            organization: spec.organization.clone(),
            organization_url: spec.organization_url.clone(),
            roles: spec.roles.clone().unwrap_or_default(),
            timezone: spec.timezone.clone(),
        }
    }
}

/// The `<scm>` section; `branch` has no POM counterpart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomScm {
    pub url: String,
    pub connection: Option<String>,
    pub developer_connection: Option<String>,
}

/// Descriptive part of a POM. Coordinates come from the publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MavenPom {
    pub name: String,
    pub description: String,
    pub url: String,
    pub licenses: Vec<PomLicense>,
    pub developers: Vec<PomDeveloper>,
    pub scm: Option<PomScm>,
}

impl MavenPom {
    /// The POM `name` is the artifact id.
    #[must_use]
    pub fn from_spec(spec: &PomSpec) -> Self {
        Self {
            name: spec.artifact_id.clone(),
            description: spec.description.clone(),
            url: spec.url.clone(),
            licenses: spec
                .licenses
                .iter()
                .map(|license| PomLicense {
                    name: license.name.clone(),
                    url: license.value.clone(),
                })
                .collect(),
            developers: spec
                .developers
                .iter()
                .flatten()
                .map(PomDeveloper::from)
                .collect(),
            scm: spec.scm.as_ref().map(|scm| PomScm {
                url: scm.url.clone(),
                connection: scm.connection.clone(),
                developer_connection: scm.developer_connection.clone(),
            }),
        }
    }
}

/// Renders a complete `pom.xml`.
///
/// # Errors
/// Returns error if the XML writer fails.
pub fn render_pom(coordinates: &Coordinates, pom: Option<&MavenPom>) -> Result<String> {
    let mut doc = XmlDocument::new()?;
    doc.start(
        "project",
        &[
            ("xmlns", POM_NAMESPACE),
            ("xmlns:xsi", XSI_NAMESPACE),
            ("xsi:schemaLocation", POM_SCHEMA_LOCATION),
        ],
    )?;
    doc.text_element("modelVersion", MODEL_VERSION)?;
    doc.text_element("groupId", &coordinates.group)?;
    doc.text_element("artifactId", &coordinates.module)?;
    doc.text_element("version", &coordinates.version)?;

    if let Some(pom) = pom {
        write_metadata(&mut doc, pom)?;
    }

    doc.end("project")?;
    doc.finish()
}

fn write_metadata(doc: &mut XmlDocument, pom: &MavenPom) -> Result<()> {
    doc.text_element("name", &pom.name)?;
    doc.text_element("description", &pom.description)?;
    doc.text_element("url", &pom.url)?;

    if !pom.licenses.is_empty() {
        doc.start("licenses", &[])?;
        for license in &pom.licenses {
            doc.start("license", &[])?;
            doc.text_element("name", &license.name)?;
            doc.text_element("url", &license.url)?;
            doc.end("license")?;
        }
        doc.end("licenses")?;
    }

    if !pom.developers.is_empty() {
        doc.start("developers", &[])?;
        for developer in &pom.developers {
            doc.start("developer", &[])?;
            doc.text_element("id", &developer.id)?;
            doc.optional_element("name", developer.name.as_deref())?;
            doc.optional_element("email", developer.email.as_deref())?;
            doc.optional_element("url", developer.url.as_deref())?;
            doc.optional_element("organization", developer.organization.as_deref())?;
            doc.optional_element("organizationUrl", developer.organization_url.as_deref())?;
            if !developer.roles.is_empty() {
                doc.start("roles", &[])?;
                for role in &developer.roles {
                    doc.text_element("role", role)?;
                }
                doc.end("roles")?;
            }
            doc.optional_element("timezone", developer.timezone.as_deref())?;
            doc.end("developer")?;
        }
        doc.end("developers")?;
    }

    if let Some(scm) = &pom.scm {
        doc.start("scm", &[])?;
        doc.optional_element("connection", scm.connection.as_deref())?;
        doc.optional_element("developerConnection", scm.developer_connection.as_deref())?;
        doc.text_element("url", &scm.url)?;
        doc.end("scm")?;
    }

    Ok(())
}
