//! Storage layer for superlists

pub mod db;
pub mod models;

pub use db::Database;
pub use models::*;

/// Errors raised by the list/item store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The referenced list does not exist.
    #[error("List {0} not found")]
    NotFound(ListId),

    /// The underlying SQLite call failed.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The data directory could not be prepared.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}
