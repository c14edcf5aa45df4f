//! To-do item model.
//!
//! # Invariants
//! - `done_date` is stamped whenever `is_done` flips from false to true and is
//!   never cleared, not even when `is_done` is set back to false.
//! - `list_id`, when set, referenced an existing list at write time.

use super::list::ListId;
use super::validation::{validate_item_description, validate_item_title, ValidationError};
use serde::{Deserialize, Serialize};

/// Storage-assigned item identifier.
pub type ItemId = i64;

/// Completion state of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionState {
    Pending,
    Done,
}

/// Persisted to-do item, also used as the JSON response shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: ItemId,
    pub title: String,
    pub description: Option<String>,
    pub is_done: bool,
    /// Unix epoch milliseconds of the last pending -> done transition.
    pub done_date: Option<i64>,
    pub list_id: Option<ListId>,
}

impl TodoItem {
    pub fn state(&self) -> CompletionState {
        if self.is_done {
            CompletionState::Done
        } else {
            CompletionState::Pending
        }
    }

    /// Returns whether moving to `is_done` is a Pending -> Done transition,
    /// which is the only case that stamps `done_date`.
    pub fn completes_with(&self, is_done: bool) -> bool {
        is_done && self.state() == CompletionState::Pending
    }
}

/// Input for creating an item. New items always start pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodoItem {
    pub title: String,
    pub description: Option<String>,
    pub list_id: Option<ListId>,
}

impl NewTodoItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            list_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn in_list(mut self, list_id: ListId) -> Self {
        self.list_id = Some(list_id);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_item_title(&self.title)?;
        validate_item_description(self.description.as_deref())
    }
}

/// Full replacement of an item's editable fields.
///
/// `done_date` is not part of the input; the store derives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItemUpdate {
    pub id: ItemId,
    pub title: String,
    pub description: Option<String>,
    pub is_done: bool,
    pub list_id: Option<ListId>,
}

impl TodoItemUpdate {
    /// Starts an update that keeps every editable field of `item`.
    pub fn from_item(item: &TodoItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            description: item.description.clone(),
            is_done: item.is_done,
            list_id: item.list_id,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_item_title(&self.title)?;
        validate_item_description(self.description.as_deref())
    }
}
