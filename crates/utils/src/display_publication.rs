use colored::Colorize;
use gradlespec_core::PublicationOutcome;

/// One-line summary of a configured or skipped publication.
pub fn display_publication(outcome: &PublicationOutcome) -> String {
    match outcome {
        PublicationOutcome::Configured {
            publication,
            signed,
        } => format!(
            "{} {} {} {} {}{}",
            format!("[{}]", publication.kind()).bright_blue().bold(),
            publication.name().bright_white().bold(),
            format!("({})", publication.coordinates()).bright_green(),
            "→".bright_cyan(),
            publication.descriptor_file_name().bright_black(),
            if *signed {
                format!(" {}", "signed".bright_magenta())
            } else {
                String::new()
            }
        ),
        PublicationOutcome::Skipped { name, reason } => format!(
            "{} {} {} {}",
            "[Skipped]".bright_black().bold(),
            name.bright_white().bold(),
            "→".bright_cyan(),
            reason.to_string().yellow()
        ),
    }
}
