//! Add command - append an item from the terminal.
//!
//! Mirrors the two web forms: without `--list` it starts a new list, with
//! `--list` it appends to an existing one.

use anyhow::Result;
use colored::Colorize;

use superlists::storage::{ListId, StorageError};

use crate::cli::CommandContext;

/// Arguments for the add command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    superlists add \"Buy peacock feathers\"            Start a new list\n    \
    superlists add \"Make a fly\" --list 1             Append to list 1")]
pub struct Args {
    /// Text of the new item
    pub text: String,

    /// Append to this list instead of starting a new one
    #[arg(short, long, value_name = "LIST_ID")]
    pub list: Option<i64>,
}

/// Executes the add command.
pub fn run(args: Args, ctx: &CommandContext) -> Result<()> {
    let db = ctx.open_db()?;

    let list_id = match args.list {
        Some(id) => ListId(id),
        None => {
            let id = db.create_list()?;
            println!("{} list #{}", "Started".green(), id);
            id
        }
    };

    match db.create_item(list_id, &args.text) {
        Ok(_) => {}
        Err(StorageError::NotFound(_)) => {
            anyhow::bail!("List {list_id} not found");
        }
        Err(e) => return Err(e.into()),
    }

    println!("{} to list #{}: {}", "Added".green(), list_id, args.text);
    Ok(())
}
