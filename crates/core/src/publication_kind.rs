use colored::Colorize;
use serde::Serialize;
use std::fmt::Display;

/// Publication format, derived from the free-text `type` of a publication.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum PublicationKind {
    Maven,
    Ivy,
    Unknown,
}

impl PublicationKind {
    /// Case-insensitive, whitespace-tolerant lookup. Anything unrecognized is `Unknown`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "maven" => Self::Maven,
            "ivy" => Self::Ivy,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Maven => "maven",
            Self::Ivy => "ivy",
            Self::Unknown => "unknown",
        }
    }
}

impl Display for PublicationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Maven => "Maven".red().bold(),
                Self::Ivy => "Ivy".green().bold(),
                Self::Unknown => "Unknown".bright_black().bold(),
            }
        )
    }
}
