use colored::Colorize;
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

/// Non-fatal finding reported while resolving or configuring publications.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Publication name or document the finding is about
    pub subject: String,
    pub message: String,
}

impl Diagnostic {
    pub fn info(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn warning(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self.severity {
            Severity::Info => "info".bright_blue().bold(),
            Severity::Warning => "warning".yellow().bold(),
        };
        write!(f, "{label}: {} => {}", self.subject.bold(), self.message)
    }
}
