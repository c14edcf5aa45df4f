//! SQLite storage context for lists and items.
//!
//! # Schema
//! - `todo_lists(id, title)`.
//! - `todo_items(id, title, description, is_done, done_date, list_id)`, where
//!   `list_id` references `todo_lists(id)` with `ON DELETE SET NULL`. The list
//!   store detaches items explicitly before deleting a list; the foreign key
//!   action only backs that up for deletes issued outside the store.
//! - `is_done` is constrained to `0`/`1`; `done_date` is epoch milliseconds.
//!
//! # Invariants
//! - Every connection runs with `foreign_keys = ON`.
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Stores only ever see a connection whose migrations have succeeded.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
