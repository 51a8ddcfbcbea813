//! SQLite storage layer for superlists

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

use super::models::{Item, ItemId, ListId, ListSummary, TodoList};
use super::StorageError;

type Result<T> = std::result::Result<T, StorageError>;

/// Get the default database path
pub fn default_db_path() -> Result<PathBuf> {
    let data_dir = dirs::home_dir()
        .ok_or_else(|| {
            StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not find home directory",
            ))
        })?
        .join(".superlists");

    std::fs::create_dir_all(&data_dir)?;
    Ok(data_dir.join("superlists.db"))
}

/// Database connection wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Open the default database
    pub fn open_default() -> Result<Self> {
        let path = default_db_path()?;
        Self::open(&path)
    }

    /// Open a private in-memory database, mostly for tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", true)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Run migrations
    fn migrate(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS lists (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                list_id INTEGER NOT NULL,
                text TEXT NOT NULL,
                created_at TEXT NOT NULL,
                FOREIGN KEY (list_id) REFERENCES lists(id)
            );

            CREATE INDEX IF NOT EXISTS idx_items_list_id ON items(list_id);
            "#,
        )?;
        Ok(())
    }

    // ==================== Lists ====================

    /// Allocate a new, empty list and return its id.
    pub fn create_list(&self) -> Result<ListId> {
        self.conn.execute(
            "INSERT INTO lists (created_at) VALUES (?1)",
            params![Utc::now().to_rfc3339()],
        )?;
        let id = ListId(self.conn.last_insert_rowid());
        tracing::debug!(list_id = %id, "Created list");
        Ok(id)
    }

    /// Get a list by ID
    pub fn get_list(&self, id: ListId) -> Result<TodoList> {
        self.conn
            .query_row(
                "SELECT id, created_at FROM lists WHERE id = ?1",
                params![id.0],
                |row| {
                    Ok(TodoList {
                        id: ListId(row.get(0)?),
                        created_at: parse_timestamp(row.get(1)?, 1)?,
                    })
                },
            )
            .optional()?
            .ok_or(StorageError::NotFound(id))
    }

    /// Check whether a list exists
    pub fn list_exists(&self, id: ListId) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM lists WHERE id = ?1",
            params![id.0],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Most recently created lists with their item counts, newest first
    pub fn recent_lists(&self, limit: usize) -> Result<Vec<ListSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT l.id, l.created_at, COUNT(i.id)
             FROM lists l
             LEFT JOIN items i ON i.list_id = l.id
             GROUP BY l.id
             ORDER BY l.id DESC
             LIMIT ?1",
        )?;

        let rows = stmt.query_map(params![limit as i64], |row| {
            Ok(ListSummary {
                list: TodoList {
                    id: ListId(row.get(0)?),
                    created_at: parse_timestamp(row.get(1)?, 1)?,
                },
                item_count: row.get(2)?,
            })
        })?;

        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    // ==================== Items ====================

    /// Add an item to an existing list
    pub fn create_item(&self, list_id: ListId, text: &str) -> Result<ItemId> {
        if !self.list_exists(list_id)? {
            return Err(StorageError::NotFound(list_id));
        }

        self.conn.execute(
            "INSERT INTO items (list_id, text, created_at) VALUES (?1, ?2, ?3)",
            params![list_id.0, text, Utc::now().to_rfc3339()],
        )?;
        let id = ItemId(self.conn.last_insert_rowid());
        tracing::debug!(list_id = %list_id, item_id = %id, "Created item");
        Ok(id)
    }

    /// Get the items of a list in the order they were added
    pub fn get_items_for_list(&self, list_id: ListId) -> Result<Vec<Item>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, list_id, text, created_at
             FROM items
             WHERE list_id = ?1
             ORDER BY id",
        )?;

        let rows = stmt.query_map(params![list_id.0], Self::row_to_item)?;

        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    fn row_to_item(row: &rusqlite::Row) -> rusqlite::Result<Item> {
        Ok(Item {
            id: ItemId(row.get(0)?),
            list_id: ListId(row.get(1)?),
            text: row.get(2)?,
            created_at: parse_timestamp(row.get(3)?, 3)?,
        })
    }

    // ==================== Stats ====================

    /// Get total list count
    pub fn list_count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM lists", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Get total item count
    pub fn item_count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn parse_timestamp(raw: String, column: usize) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}
