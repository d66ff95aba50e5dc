use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use gradlespec_core::{
    Coordinates, Diagnostic, PublicationKind, PublicationOutcome, PublishedArtifact, SkipReason,
    configure_publications,
};
use gradlespec_utils::{display_publication, generate_file};
use serde::Serialize;
use tracing::debug;

use crate::{
    configurators::get_configurators,
    context::{CommandContext, print_diagnostics},
    host::LocalHost,
    options::{FormatOptions, KeyValue},
};

#[derive(Args, Debug)]
#[command(about = "Configure publications and write their descriptors")]
pub struct PublishArgs {
    /// Output directory, relative to the project directory
    #[arg(long, default_value = "build")]
    out: PathBuf,

    /// Software component provided by the build; repeatable
    #[arg(long = "component", value_name = "NAME", default_value = "java")]
    components: Vec<String>,

    /// Output file of a task; repeatable
    #[arg(long = "artifact", value_name = "TASK=PATH")]
    artifacts: Vec<KeyValue>,

    #[arg(short, long)]
    dry_run: bool,

    #[arg(long, default_value = "stdout")]
    format: FormatOptions,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PublicationEntry<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<PublicationKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    coordinates: Option<&'a Coordinates>,
    signed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    descriptor: Option<PathBuf>,
    artifacts: &'a [PublishedArtifact],
    #[serde(skip_serializing_if = "Option::is_none")]
    skipped: Option<&'a SkipReason>,
    diagnostics: &'a [Diagnostic],
}

/// Configure every publication of the specification and write its descriptor
///
/// # Errors
/// Returns error if the specification cannot be resolved, a required artifact
/// is missing or a descriptor cannot be written.
pub fn handle_publish(context: &CommandContext, args: &PublishArgs) -> Result<()> {
    let resolved = context.resolve()?;
    if let FormatOptions::Stdout = args.format {
        print_diagnostics(&resolved.diagnostics);
    }

    let host = LocalHost::new(
        args.components.iter().cloned(),
        args.artifacts
            .iter()
            .map(|artifact| (artifact.key.clone(), context.project_path(Path::new(&artifact.value)))),
    );
    let outcomes = configure_publications(
        &resolved.spec,
        &host,
        &get_configurators(),
        &context.config,
    )?;

    if outcomes.is_empty() {
        args.format.print("No publications found", "[]");
        return Ok(());
    }

    let out_dir = context.project_path(&args.out).join("publications");
    debug!(out_dir = %out_dir.display(), dry_run = args.dry_run, "writing descriptors");
    let mut entries = Vec::with_capacity(outcomes.len());

    for outcome in &outcomes {
        if let FormatOptions::Stdout = args.format {
            println!("{}", display_publication(outcome));
        }
        match outcome {
            PublicationOutcome::Configured {
                publication,
                signed,
            } => {
                let descriptor = out_dir
                    .join(publication.name())
                    .join(publication.descriptor_file_name());
                let xml = publication.render_descriptor()?;
                if args.dry_run {
                    debug!(path = %descriptor.display(), "dry run, descriptor not written");
                } else {
                    generate_file(&descriptor, xml.as_bytes()).with_context(|| {
                        format!("Failed to write descriptor of \"{}\"", publication.name())
                    })?;
                }
                if let FormatOptions::Stdout = args.format {
                    print_diagnostics(publication.diagnostics());
                }
                entries.push(PublicationEntry {
                    name: publication.name(),
                    kind: Some(publication.kind()),
                    coordinates: Some(publication.coordinates()),
                    signed: *signed,
                    descriptor: (!args.dry_run).then_some(descriptor),
                    artifacts: publication.artifacts(),
                    skipped: None,
                    diagnostics: publication.diagnostics(),
                });
            }
            PublicationOutcome::Skipped { name, reason } => entries.push(PublicationEntry {
                name,
                kind: None,
                coordinates: None,
                signed: false,
                descriptor: None,
                artifacts: &[],
                skipped: Some(reason),
                diagnostics: &[],
            }),
        }
    }

    match args.format {
        FormatOptions::Stdout if args.dry_run => {
            println!("Dry run, no descriptors written");
        }
        FormatOptions::Stdout => {}
        FormatOptions::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
    }
    Ok(())
}
