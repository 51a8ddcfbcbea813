//! Show command - print the items of one list.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use superlists::storage::{Item, ListId, StorageError, TodoList};

use crate::cli::{CommandContext, OutputFormat};

/// Arguments for the show command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    superlists show 3             Print list 3\n    \
    superlists show 3 -f json     Print list 3 as JSON")]
pub struct Args {
    /// ID of the list to show
    #[arg(value_name = "LIST_ID")]
    pub list_id: i64,

    /// Output format: text (default) or json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// JSON output structure for a list with its items.
#[derive(Serialize)]
struct ListOutput {
    list: TodoList,
    items: Vec<Item>,
}

/// Executes the show command.
pub fn run(args: Args, ctx: &CommandContext) -> Result<()> {
    let db = ctx.open_db()?;
    let list_id = ListId(args.list_id);

    let list = match db.get_list(list_id) {
        Ok(list) => list,
        Err(StorageError::NotFound(_)) => {
            anyhow::bail!(
                "List {list_id} not found. Run 'superlists status' to see recent lists."
            );
        }
        Err(e) => return Err(e.into()),
    };
    let items = db.get_items_for_list(list.id)?;

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&ListOutput { list, items })?;
            println!("{json}");
        }
        OutputFormat::Text => print_list_text(&list, &items),
    }

    Ok(())
}

fn print_list_text(list: &TodoList, items: &[Item]) {
    println!(
        "{} {}",
        format!("List #{}", list.id).bold().cyan(),
        format!("created {}", list.created_at.format("%Y-%m-%d %H:%M")).dimmed()
    );

    if items.is_empty() {
        println!("  {}", "(empty)".dimmed());
        return;
    }

    for (index, item) in items.iter().enumerate() {
        println!("  {}: {}", index + 1, item.text);
    }
}
