//! Serve command - run the web application.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use superlists::render::TeraRenderer;
use superlists::web::{self, AppState};

use crate::cli::CommandContext;

/// Arguments for the serve command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    superlists serve                         Listen on the configured address\n    \
    superlists serve --bind 0.0.0.0:8000     Listen on all interfaces\n    \
    superlists serve --log-file server.log   Also write logs to a file")]
pub struct Args {
    /// Address to listen on (default: 127.0.0.1:8000)
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Append logs to this file in addition to stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Executes the serve command.
pub fn run(args: Args, ctx: &CommandContext) -> Result<()> {
    let addr = ctx.config.resolve_bind_address(args.bind.as_deref())?;
    let db = ctx.open_db()?;
    let renderer = TeraRenderer::new().context("Failed to load page templates")?;

    println!("{}", format!("Serving to-do lists on http://{addr}").green());
    println!("{}", "Press Ctrl+C to stop".dimmed());

    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    rt.block_on(web::serve(AppState::new(db, renderer), addr))
}
