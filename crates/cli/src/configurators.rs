use gradlespec_core::PublicationConfigurator;
use gradlespec_ivy::IvyConfigurator;
use gradlespec_maven::MavenConfigurator;

// configurator list

pub fn get_configurators() -> Vec<Box<dyn PublicationConfigurator>> {
    vec![
        Box::new(MavenConfigurator::new()),
        Box::new(IvyConfigurator::new()),
    ]
}
