//! Status command - show database totals and the newest lists.

use anyhow::Result;
use colored::Colorize;

use crate::cli::CommandContext;

/// Arguments for the status command.
#[derive(clap::Args)]
pub struct Args {
    /// Number of recent lists to show
    #[arg(short = 'n', long, default_value = "5")]
    pub limit: usize,
}

/// Executes the status command.
pub fn run(args: Args, ctx: &CommandContext) -> Result<()> {
    let db_path = ctx.db_path()?;
    let db = ctx.open_db()?;
    let list_count = db.list_count()?;
    let item_count = db.item_count()?;

    println!("{}", "superlists".bold().cyan());
    println!();
    println!("{}", "Database:".bold());
    println!("  Path:   {}", db_path.display());
    println!("  Lists:  {list_count}");
    println!("  Items:  {item_count}");

    if list_count == 0 {
        println!();
        println!(
            "{}",
            "Hint: Run 'superlists add <TEXT>' or start the server with 'superlists serve'".yellow()
        );
        return Ok(());
    }

    let recent = db.recent_lists(args.limit)?;
    println!();
    println!("{}", "Recent lists:".bold());
    for summary in recent {
        let ago = chrono::Utc::now()
            .signed_duration_since(summary.list.created_at)
            .num_hours();
        let ago_str = if ago < 1 {
            "just now".to_string()
        } else if ago < 24 {
            format!("{ago} hours ago")
        } else {
            format!("{} days ago", ago / 24)
        };

        println!(
            "  {:>6}  {:12}  {} items",
            format!("#{}", summary.list.id).cyan(),
            ago_str.dimmed(),
            summary.item_count
        );
    }

    Ok(())
}
