//! CLI commands for superlists.
//!
//! Each submodule implements a single CLI command with its argument
//! parsing and execution logic.

/// Add an item to a list, or start a new one.
pub mod add;

/// Shell completion scripts.
pub mod completions;

/// Show the effective configuration.
pub mod config;

/// Run the web server.
pub mod serve;

/// Print one list's items.
pub mod show;

/// Database totals and recent lists.
pub mod status;
