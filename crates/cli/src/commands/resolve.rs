use anyhow::Result;
use clap::Args;
use gradlespec_core::{Diagnostic, ProjectSpec, encode_project};
use serde::Serialize;

use crate::{
    context::{CommandContext, print_diagnostics},
    options::FormatOptions,
};

#[derive(Args, Debug)]
#[command(about = "Print the resolved project specification")]
pub struct ResolveArgs {
    #[arg(long, default_value = "stdout")]
    format: FormatOptions,
}

#[derive(Serialize)]
struct ResolveReport<'a> {
    spec: &'a ProjectSpec,
    diagnostics: &'a [Diagnostic],
}

/// Print the specification with developer references expanded
///
/// # Errors
/// Returns error if the specification cannot be resolved.
pub fn handle_resolve(context: &CommandContext, args: &ResolveArgs) -> Result<()> {
    let resolved = context.resolve()?;
    match args.format {
        FormatOptions::Stdout => {
            print_diagnostics(&resolved.diagnostics);
            println!("{}", encode_project(&resolved.spec)?);
        }
        FormatOptions::Json => {
            let report = ResolveReport {
                spec: &resolved.spec,
                diagnostics: &resolved.diagnostics,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
