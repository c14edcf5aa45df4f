//! To-do list model.

use super::item::TodoItem;
use super::validation::{validate_list_title, ValidationError};
use serde::{Deserialize, Serialize};

/// Storage-assigned list identifier.
pub type ListId = i64;

/// Persisted list with its items eagerly loaded.
///
/// `items` is derived from `todo_items.list_id`; it is never written through
/// this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoList {
    pub id: ListId,
    pub title: String,
    #[serde(default)]
    pub items: Vec<TodoItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodoList {
    pub title: String,
}

impl NewTodoList {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_list_title(&self.title)
    }
}

/// Title replacement for an existing list; its items are untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListUpdate {
    pub id: ListId,
    pub title: String,
}

impl TodoListUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_list_title(&self.title)
    }
}
