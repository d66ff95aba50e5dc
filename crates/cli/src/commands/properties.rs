use std::{collections::BTreeMap, path::PathBuf};

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use gradlespec_utils::write_properties_file;

use crate::{context::CommandContext, options::KeyValue};

#[derive(Args, Debug)]
#[command(about = "Generate a properties file")]
pub struct PropertiesArgs {
    /// Target file, relative to the project directory
    #[arg(long)]
    file: PathBuf,

    /// Entry to write
    #[arg(long = "set", value_name = "KEY=VALUE")]
    properties: Vec<KeyValue>,
}

/// Write the given entries as a Java properties file
///
/// # Errors
/// Returns error if the file cannot be written.
pub fn handle_properties(context: &CommandContext, args: &PropertiesArgs) -> Result<()> {
    let path = context.project_path(&args.file);
    let properties: BTreeMap<String, String> =
        args.properties.iter().cloned().map(Into::into).collect();

    write_properties_file(&path, &properties)?;
    println!("{} {}", "Generated".bright_green().bold(), path.display());
    Ok(())
}
