//! Completions command - generate shell completion scripts.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io;

/// Arguments for the completions command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    superlists completions bash > ~/.local/share/bash-completion/completions/superlists\n    \
    superlists completions zsh > ~/.zfunc/_superlists\n    \
    superlists completions fish > ~/.config/fish/completions/superlists.fish")]
pub struct Args {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Generates completions using a provided clap Command.
///
/// Called from main.rs, which owns the Cli struct.
pub fn generate_completions(cmd: &mut Command, shell: Shell) {
    generate(shell, cmd, "superlists", &mut io::stdout());
}
