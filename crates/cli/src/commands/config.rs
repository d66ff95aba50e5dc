use anyhow::Result;
use clap::Args;

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Show the effective gradlespec configuration")]
pub struct ConfigArgs {}

/// Display gradlespec configuration; signing secrets are never printed
///
/// # Errors
/// Returns error if serializing the configuration fails.
pub fn handle_config(context: &CommandContext, _args: &ConfigArgs) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&context.config)?);
    Ok(())
}
