use clap::ValueEnum;

/// Output of the `resolve`, `build-info` and `publish` reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatOptions {
    /// Machine-readable report, one JSON document per run
    #[value(name = "json")]
    Json,
    /// Colored summary lines with diagnostics on stderr
    #[value(name = "stdout")]
    Stdout,
}

impl FormatOptions {
    /// Prints whichever of the two messages matches the format.
    pub fn print(&self, stdout_msg: &str, json_msg: &str) {
        match self {
            Self::Stdout => println!("{stdout_msg}"),
            Self::Json => println!("{json_msg}"),
        }
    }
}
