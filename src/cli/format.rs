//! Output formatting utilities for CLI commands.

use clap::ValueEnum;

/// Output format options for CLI commands.
///
/// - `Text` for human-readable terminal output (default)
/// - `Json` for machine-readable output and scripting
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default).
    #[default]
    Text,
    /// Machine-readable JSON output.
    Json,
}
