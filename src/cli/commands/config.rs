//! Config command - show the effective configuration

use anyhow::Result;
use colored::Colorize;

use superlists::config::Config;

use crate::cli::CommandContext;

pub fn run(ctx: &CommandContext) -> Result<()> {
    println!("{}", "superlists configuration".bold());
    println!();

    let config_path = Config::config_path()?;
    let file_state = if config_path.exists() {
        "".normal()
    } else {
        " (not present, using defaults)".dimmed()
    };
    println!(
        "  {}  {}{}",
        "Config file:".dimmed(),
        config_path.display(),
        file_state
    );
    println!("  {}     {}", "Database:".dimmed(), ctx.db_path()?.display());
    println!("  {}       {}", "Listen:".dimmed(), ctx.config.bind_address);

    Ok(())
}
