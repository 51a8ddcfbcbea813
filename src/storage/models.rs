//! Core data models for superlists
//!
//! A `TodoList` is nothing more than a grouping key. Each `Item` belongs to
//! exactly one list and carries the text the visitor typed in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Surrogate key of a list, allocated by the database on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListId(pub i64);

/// Surrogate key of an item, allocated by the database on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ListId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(ListId)
    }
}

impl ListId {
    /// Path of the detail page for this list.
    pub fn url(&self) -> String {
        format!("/lists/{}/", self.0)
    }
}

/// A to-do list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoList {
    /// Unique identifier for this list
    pub id: ListId,

    /// When the list was created
    pub created_at: DateTime<Utc>,
}

/// A single entry on a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,

    /// List this item belongs to
    pub list_id: ListId,

    /// Free text supplied by the visitor (may be empty)
    pub text: String,

    pub created_at: DateTime<Utc>,
}

/// A list together with how many items it holds, for overviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSummary {
    pub list: TodoList,
    pub item_count: i64,
}
