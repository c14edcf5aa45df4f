//! Request bodies accepted by the HTTP boundary.
//!
//! Responses serialize `TodoItem` / `TodoList` directly. Requests carry only
//! the fields a caller may set, and convert into store inputs here so both
//! item and list endpoints share one mapping.

use super::item::{ItemId, NewTodoItem, TodoItemUpdate};
use super::list::{ListId, NewTodoList, TodoListUpdate};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub list_id: Option<ListId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_done: bool,
    #[serde(default)]
    pub list_id: Option<ListId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateListRequest {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateListRequest {
    pub id: ListId,
    pub title: String,
}

impl From<CreateItemRequest> for NewTodoItem {
    fn from(value: CreateItemRequest) -> Self {
        Self {
            title: value.title,
            description: value.description,
            list_id: value.list_id,
        }
    }
}

impl From<UpdateItemRequest> for TodoItemUpdate {
    fn from(value: UpdateItemRequest) -> Self {
        Self {
            id: value.id,
            title: value.title,
            description: value.description,
            is_done: value.is_done,
            list_id: value.list_id,
        }
    }
}

impl From<CreateListRequest> for NewTodoList {
    fn from(value: CreateListRequest) -> Self {
        Self { title: value.title }
    }
}

impl From<UpdateListRequest> for TodoListUpdate {
    fn from(value: UpdateListRequest) -> Self {
        Self {
            id: value.id,
            title: value.title,
        }
    }
}
