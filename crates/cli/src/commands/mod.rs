mod build_info;
mod config;
mod properties;
mod publish;
mod resolve;

pub use build_info::BuildInfoArgs;
pub use build_info::handle_build_info;
pub use config::ConfigArgs;
pub use config::handle_config;
pub use properties::PropertiesArgs;
pub use properties::handle_properties;
pub use publish::PublishArgs;
pub use publish::handle_publish;
pub use resolve::ResolveArgs;
pub use resolve::handle_resolve;
