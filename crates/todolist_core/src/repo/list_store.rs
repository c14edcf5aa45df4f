//! List store: CRUD over `todo_lists` with eager item loading.
//!
//! # Invariants
//! - Reads always carry the list's current items, in item id order.
//! - Removing a list detaches its items (`list_id = NULL`) and deletes the
//!   list in one transaction; items themselves are never deleted here.

use crate::model::item::TodoItem;
use crate::model::list::{ListId, NewTodoList, TodoList, TodoListUpdate};
use crate::repo::item_store::{query_items, ITEM_SELECT_SQL};
use crate::repo::{RepoError, RepoResult};
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Transaction, TransactionBehavior};
use std::collections::HashMap;

/// SQLite-backed list store.
pub struct ListStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> ListStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Creates an empty list and returns it with its assigned id.
    pub fn add(&self, list: &NewTodoList) -> RepoResult<TodoList> {
        list.validate()?;

        self.conn.execute(
            "INSERT INTO todo_lists (title) VALUES (?1);",
            [list.title.as_str()],
        )?;
        let id = self.conn.last_insert_rowid();

        info!("event=list_add module=repo status=ok list_id={id}");

        Ok(TodoList {
            id,
            title: list.title.clone(),
            items: Vec::new(),
        })
    }

    /// Renames a list. Returns `Ok(None)` when no list has `update.id`.
    pub fn update(&self, update: &TodoListUpdate) -> RepoResult<Option<TodoList>> {
        update.validate()?;

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let changed = tx.execute(
            "UPDATE todo_lists SET title = ?2 WHERE id = ?1;",
            params![update.id, update.title.as_str()],
        )?;
        if changed == 0 {
            return Ok(None);
        }

        let items = load_items_of(&tx, update.id)?;
        tx.commit()?;

        info!("event=list_update module=repo status=ok list_id={}", update.id);

        Ok(Some(TodoList {
            id: update.id,
            title: update.title.clone(),
            items,
        }))
    }

    /// Detaches every item of the list, deletes the list, and returns its
    /// final state. The returned items already have `list_id = None`.
    ///
    /// # Errors
    /// - `ListNotFound` when no list has `id`.
    pub fn remove(&self, id: ListId) -> RepoResult<TodoList> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let mut list = find_list(&tx, id)?.ok_or(RepoError::ListNotFound(id))?;

        let detached = tx.execute(
            "UPDATE todo_items SET list_id = NULL WHERE list_id = ?1;",
            [id],
        )?;
        tx.execute("DELETE FROM todo_lists WHERE id = ?1;", [id])?;
        tx.commit()?;

        info!("event=list_remove module=repo status=ok list_id={id} detached={detached}");

        for item in &mut list.items {
            item.list_id = None;
        }
        Ok(list)
    }

    pub fn get(&self, id: ListId) -> RepoResult<Option<TodoList>> {
        find_list(self.conn, id)
    }

    /// Lists every list in id order, each with its items.
    pub fn get_all(&self) -> RepoResult<Vec<TodoList>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title FROM todo_lists ORDER BY id ASC;")?;
        let lists = stmt
            .query_map([], |row| Ok((row.get::<_, ListId>(0)?, row.get::<_, String>(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        let mut items_by_list: HashMap<ListId, Vec<TodoItem>> = HashMap::new();
        let assigned = query_items(
            self.conn,
            &format!("{ITEM_SELECT_SQL} WHERE list_id IS NOT NULL ORDER BY id ASC;"),
            [],
        )?;
        for item in assigned {
            if let Some(list_id) = item.list_id {
                items_by_list.entry(list_id).or_default().push(item);
            }
        }

        Ok(lists
            .into_iter()
            .map(|(id, title)| TodoList {
                id,
                title,
                items: items_by_list.remove(&id).unwrap_or_default(),
            })
            .collect())
    }

    pub fn exists(&self, id: ListId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM todo_lists WHERE id = ?1);",
            [id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }
}

fn find_list(conn: &Connection, id: ListId) -> RepoResult<Option<TodoList>> {
    let title = conn
        .query_row(
            "SELECT title FROM todo_lists WHERE id = ?1;",
            [id],
            |row| row.get::<_, String>(0),
        )
        .optional()?;

    let Some(title) = title else {
        return Ok(None);
    };

    Ok(Some(TodoList {
        id,
        title,
        items: load_items_of(conn, id)?,
    }))
}

fn load_items_of(conn: &Connection, list_id: ListId) -> RepoResult<Vec<TodoItem>> {
    query_items(
        conn,
        &format!("{ITEM_SELECT_SQL} WHERE list_id = ?1 ORDER BY id ASC;"),
        [list_id],
    )
}
