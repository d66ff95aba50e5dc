use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::{
    commands::{
        BuildInfoArgs, ConfigArgs, PropertiesArgs, PublishArgs, ResolveArgs, handle_build_info,
        handle_config, handle_properties, handle_publish, handle_resolve,
    },
    context::CommandContext,
};
pub mod commands;
mod configurators;
pub mod context;
pub mod host;
mod logging;
pub mod options;

#[derive(Parser, Debug)]
#[command(
    name = "gradlespec",
    author,
    version,
    about = "Build information and publication metadata from a project.gradle.json specification",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Project directory holding the specification (default: current directory)
    #[arg(long, global = true)]
    project_dir: Option<PathBuf>,

    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Resolve(ResolveArgs),
    BuildInfo(BuildInfoArgs),
    Properties(PropertiesArgs),
    Publish(PublishArgs),
    Config(ConfigArgs),
}

/// Runs the command line `args` (program name first).
///
/// # Errors
/// Returns error if the selected command fails.
pub fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    logging::init(cli.verbose);

    let context = CommandContext::new(cli.project_dir)?;
    match cli.command {
        Commands::Resolve(args) => handle_resolve(&context, &args)?,
        Commands::BuildInfo(args) => handle_build_info(&context, &args)?,
        Commands::Properties(args) => handle_properties(&context, &args)?,
        Commands::Publish(args) => handle_publish(&context, &args)?,
        Commands::Config(args) => handle_config(&context, &args)?,
    }
    Ok(())
}
