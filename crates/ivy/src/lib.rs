//! # gradlespec-ivy
//!
//! Ivy publication support for gradlespec.
//!
//! Ivy publications carry the host component only. When the publication
//! declares a POM section its description, homepage and first license go into
//! the `<info>` block, and organization and developers are written as an extra
//! `<metadata>` block of the `ivy.xml` descriptor.

pub mod configurator;
pub mod descriptor;
pub mod publication;

pub use configurator::IvyConfigurator;
pub use descriptor::IvyDescriptor;
pub use publication::IvyPublication;
