//! Command-line interface for superlists.
//!
//! Besides running the web server, the CLI can inspect and extend lists
//! directly in the database.

/// Individual CLI command implementations.
pub mod commands;

/// Output format options shared by commands.
pub mod format;

pub use format::OutputFormat;

use anyhow::{Context, Result};
use std::path::PathBuf;

use superlists::config::Config;
use superlists::storage::Database;

/// Settings every command needs: the loaded config and global flags.
pub struct CommandContext {
    pub config: Config,

    /// Value of the global `--db` flag
    pub db_override: Option<PathBuf>,
}

impl CommandContext {
    /// Resolves the database path and opens it.
    pub fn open_db(&self) -> Result<Database> {
        let path = self.db_path()?;
        Database::open(&path).with_context(|| format!("Failed to open database {}", path.display()))
    }

    pub fn db_path(&self) -> Result<PathBuf> {
        self.config.resolve_db_path(self.db_override.as_deref())
    }
}
