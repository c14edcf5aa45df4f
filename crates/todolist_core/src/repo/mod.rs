//! Item and list stores over the SQLite storage context.
//!
//! # Responsibility
//! - Own every read and write of `todo_items` / `todo_lists`.
//! - Enforce referential integrity between items and lists.
//!
//! # Invariants
//! - Write paths validate field constraints before any SQL mutation.
//! - Read-modify-write operations run in one IMMEDIATE transaction.
//! - Lookups report absence as `Ok(None)`; removals of a missing id return a
//!   typed not-found error.

use crate::db::DbError;
use crate::model::item::ItemId;
use crate::model::list::ListId;
use crate::model::validation::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod item_store;
pub mod list_store;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for store persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// A field constraint was violated; nothing was written.
    Validation(ValidationError),
    /// The referenced or targeted list does not exist.
    ListNotFound(ListId),
    /// The targeted item does not exist.
    ItemNotFound(ItemId),
    Db(DbError),
    /// A persisted row violates model invariants.
    InvalidData(String),
}

impl RepoError {
    /// Returns whether this error is caused by caller input rather than
    /// storage state or storage failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::ListNotFound(id) => write!(f, "no to-do list with id {id} found"),
            Self::ItemNotFound(id) => write!(f, "no to-do item with id {id} found"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::ListNotFound(_) | Self::ItemNotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
