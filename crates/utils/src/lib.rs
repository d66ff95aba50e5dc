mod build_info;
mod display_publication;
mod generate_file;
mod get_publish_config;
mod group_path;
mod properties;
mod xml_document;

pub use build_info::{
    BuildInfo, BuildInfoGenerator, BuildInfoReport, NULL_VALUE, PlatformInfo, Toolchain,
};
pub use display_publication::display_publication;
pub use generate_file::generate_file;
pub use get_publish_config::{CONFIG_FILE_NAME, get_publish_config};
pub use group_path::get_group_as_file_path;
pub use properties::{parse_properties, store_properties, write_properties_file};
pub use xml_document::XmlDocument;
