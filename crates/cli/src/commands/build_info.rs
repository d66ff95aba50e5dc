use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use gradlespec_utils::{BuildInfo, BuildInfoGenerator, BuildInfoReport, Toolchain};
use serde::Serialize;

use crate::{
    context::{CommandContext, print_diagnostics},
    options::{FormatOptions, KeyValue},
};

#[derive(Args, Debug)]
#[command(about = "Generate build.properties into the project resources")]
pub struct BuildInfoArgs {
    /// Source set to write into; repeatable (default: from configuration)
    #[arg(long = "source-set", value_name = "NAME")]
    source_sets: Vec<String>,

    /// Extra entry; built-in keys take precedence
    #[arg(long = "set", value_name = "KEY=VALUE")]
    extras: Vec<KeyValue>,

    /// Java vendor (default: detected from JAVA_HOME)
    #[arg(long)]
    toolchain_vendor: Option<String>,

    /// Java version (default: detected from JAVA_HOME)
    #[arg(long)]
    toolchain_version: Option<String>,

    #[arg(long, default_value = "stdout")]
    format: FormatOptions,
}

#[derive(Serialize)]
struct FailedFile<'a> {
    path: &'a PathBuf,
    error: &'a str,
}

#[derive(Serialize)]
struct BuildInfoOutput<'a> {
    written: &'a [PathBuf],
    skipped: &'a [String],
    failed: Vec<FailedFile<'a>>,
}

impl<'a> From<&'a BuildInfoReport> for BuildInfoOutput<'a> {
    fn from(report: &'a BuildInfoReport) -> Self {
        Self {
            written: &report.written,
            skipped: &report.skipped,
            failed: report
                .failed
                .iter()
                .map(|(path, error)| FailedFile { path, error })
                .collect(),
        }
    }
}

/// Generate the build information file of every source set
///
/// # Errors
/// Returns error if the specification cannot be resolved.
pub fn handle_build_info(context: &CommandContext, args: &BuildInfoArgs) -> Result<()> {
    let resolved = context.resolve()?;
    if let FormatOptions::Stdout = args.format {
        print_diagnostics(&resolved.diagnostics);
    }

    let mut toolchain = Toolchain::detect(|key| std::env::var(key).ok());
    if let Some(vendor) = &args.toolchain_vendor {
        toolchain.vendor = Some(vendor.clone());
    }
    if let Some(version) = &args.toolchain_version {
        toolchain.version = Some(version.clone());
    }

    let info = BuildInfo::from_spec(&resolved.spec, toolchain)
        .with_extras(args.extras.iter().cloned().map(Into::into));
    let source_sets = if args.source_sets.is_empty() {
        context.config.source_sets.clone()
    } else {
        args.source_sets.clone()
    };

    let report =
        BuildInfoGenerator::new(&context.project_dir, source_sets).generate(&resolved.spec, &info);

    match args.format {
        FormatOptions::Stdout => {
            for path in &report.written {
                println!("{} {}", "Generated".bright_green().bold(), path.display());
            }
            for source_set in &report.skipped {
                println!(
                    "{} {}",
                    "Skipped".bright_black().bold(),
                    format!("source set \"{source_set}\" has no src/{source_set} directory")
                        .bright_black()
                );
            }
            for (path, error) in &report.failed {
                eprintln!("{} {}: {}", "warning:".yellow().bold(), path.display(), error);
            }
        }
        FormatOptions::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&BuildInfoOutput::from(&report))?
            );
        }
    }
    Ok(())
}
