//! # gradlespec-maven
//!
//! Maven publication support for gradlespec.
//!
//! Maps a publication entry of a project specification onto Maven coordinates,
//! attaches the host component and artifact outputs, and renders the `pom.xml`
//! (model version 4.0.0) with licenses, developers and SCM information.

pub mod configurator;
pub mod pom;
pub mod publication;

pub use configurator::MavenConfigurator;
pub use pom::MavenPom;
pub use publication::MavenPublication;
