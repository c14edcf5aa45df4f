//! Core domain logic for the to-do list API.
//! This crate owns the item/list invariants; HTTP callers only translate.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::dto::{CreateItemRequest, CreateListRequest, UpdateItemRequest, UpdateListRequest};
pub use model::item::{CompletionState, ItemId, NewTodoItem, TodoItem, TodoItemUpdate};
pub use model::list::{ListId, NewTodoList, TodoList, TodoListUpdate};
pub use model::validation::ValidationError;
pub use repo::item_store::ItemStore;
pub use repo::list_store::ListStore;
pub use repo::{RepoError, RepoResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
