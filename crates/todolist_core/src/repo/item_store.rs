//! Item store: CRUD, completion and history over `todo_items`.
//!
//! # Invariants
//! - A non-null `list_id` must name an existing row in `todo_lists` when the
//!   item is written; otherwise the write fails with `ListNotFound`.
//! - `done_date` is stamped only on a pending -> done transition and is never
//!   cleared.
//! - Stamps are strictly increasing across all items, so history order is
//!   completion order even within one clock millisecond.

use crate::model::item::{ItemId, NewTodoItem, TodoItem, TodoItemUpdate};
use crate::model::list::ListId;
use crate::repo::{RepoError, RepoResult};
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};
use std::time::{SystemTime, UNIX_EPOCH};

pub(crate) const ITEM_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    is_done,
    done_date,
    list_id
FROM todo_items";

/// SQLite-backed item store.
pub struct ItemStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> ItemStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Creates a pending item and returns it with its assigned id.
    ///
    /// # Errors
    /// - `Validation` when title/description break length bounds.
    /// - `ListNotFound` when `list_id` names a missing list.
    pub fn add(&self, item: &NewTodoItem) -> RepoResult<TodoItem> {
        item.validate()?;

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        if let Some(list_id) = item.list_id {
            ensure_list_exists(&tx, list_id)?;
        }

        tx.execute(
            "INSERT INTO todo_items (title, description, is_done, done_date, list_id)
             VALUES (?1, ?2, 0, NULL, ?3);",
            params![item.title.as_str(), item.description.as_deref(), item.list_id],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        info!(
            "event=item_add module=repo status=ok item_id={} list_id={:?}",
            id, item.list_id
        );

        Ok(TodoItem {
            id,
            title: item.title.clone(),
            description: item.description.clone(),
            is_done: false,
            done_date: None,
            list_id: item.list_id,
        })
    }

    /// Replaces title, description, completion flag and list of an item.
    ///
    /// Returns `Ok(None)` when no item has `update.id`. The list reference is
    /// checked before the item lookup.
    pub fn update(&self, update: &TodoItemUpdate) -> RepoResult<Option<TodoItem>> {
        update.validate()?;

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        if let Some(list_id) = update.list_id {
            ensure_list_exists(&tx, list_id)?;
        }

        let Some(current) = find_item(&tx, update.id)? else {
            return Ok(None);
        };

        let done_date = if current.completes_with(update.is_done) {
            Some(next_done_stamp(&tx)?)
        } else {
            current.done_date
        };

        tx.execute(
            "UPDATE todo_items
             SET
                title = ?2,
                description = ?3,
                is_done = ?4,
                done_date = ?5,
                list_id = ?6
             WHERE id = ?1;",
            params![
                update.id,
                update.title.as_str(),
                update.description.as_deref(),
                bool_to_int(update.is_done),
                done_date,
                update.list_id,
            ],
        )?;
        tx.commit()?;

        info!(
            "event=item_update module=repo status=ok item_id={} is_done={} stamped={}",
            update.id,
            update.is_done,
            done_date != current.done_date
        );

        Ok(Some(TodoItem {
            id: update.id,
            title: update.title.clone(),
            description: update.description.clone(),
            is_done: update.is_done,
            done_date,
            list_id: update.list_id,
        }))
    }

    /// Marks an item done and stamps its completion time.
    ///
    /// Already-done items are returned unchanged. Returns `Ok(None)` when the
    /// item does not exist.
    pub fn mark_done(&self, id: ItemId) -> RepoResult<Option<TodoItem>> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let Some(mut item) = find_item(&tx, id)? else {
            return Ok(None);
        };

        if !item.completes_with(true) {
            return Ok(Some(item));
        }

        let stamp = next_done_stamp(&tx)?;
        tx.execute(
            "UPDATE todo_items SET is_done = 1, done_date = ?2 WHERE id = ?1;",
            params![id, stamp],
        )?;
        tx.commit()?;

        info!("event=item_mark_done module=repo status=ok item_id={id} done_date={stamp}");

        item.is_done = true;
        item.done_date = Some(stamp);
        Ok(Some(item))
    }

    /// Deletes an item and returns its final state.
    ///
    /// # Errors
    /// - `ItemNotFound` when no item has `id`.
    pub fn remove(&self, id: ItemId) -> RepoResult<TodoItem> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let item = find_item(&tx, id)?.ok_or(RepoError::ItemNotFound(id))?;
        tx.execute("DELETE FROM todo_items WHERE id = ?1;", [id])?;
        tx.commit()?;

        info!("event=item_remove module=repo status=ok item_id={id}");
        Ok(item)
    }

    pub fn get(&self, id: ItemId) -> RepoResult<Option<TodoItem>> {
        find_item(self.conn, id)
    }

    /// Lists every item in id order.
    pub fn get_all(&self) -> RepoResult<Vec<TodoItem>> {
        query_items(self.conn, &format!("{ITEM_SELECT_SQL} ORDER BY id ASC;"), [])
    }

    /// Lists done items, oldest completion first.
    pub fn get_history(&self) -> RepoResult<Vec<TodoItem>> {
        query_items(
            self.conn,
            &format!("{ITEM_SELECT_SQL} WHERE is_done = 1 ORDER BY done_date ASC, id ASC;"),
            [],
        )
    }

    pub fn exists(&self, id: ItemId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM todo_items WHERE id = ?1);",
            [id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }
}

fn find_item(conn: &Connection, id: ItemId) -> RepoResult<Option<TodoItem>> {
    let mut stmt = conn.prepare(&format!("{ITEM_SELECT_SQL} WHERE id = ?1;"))?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(parse_item_row(row)?));
    }

    Ok(None)
}

pub(crate) fn query_items<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> RepoResult<Vec<TodoItem>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    let mut items = Vec::new();

    while let Some(row) = rows.next()? {
        items.push(parse_item_row(row)?);
    }

    Ok(items)
}

pub(crate) fn parse_item_row(row: &Row<'_>) -> RepoResult<TodoItem> {
    let id: ItemId = row.get("id")?;
    let is_done = match row.get::<_, i64>("is_done")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid is_done value `{other}` in todo_items.is_done for item {id}"
            )));
        }
    };

    let done_date: Option<i64> = row.get("done_date")?;
    if is_done && done_date.is_none() {
        return Err(RepoError::InvalidData(format!(
            "done item {id} has no todo_items.done_date"
        )));
    }

    Ok(TodoItem {
        id,
        title: row.get("title")?,
        description: row.get("description")?,
        is_done,
        done_date,
        list_id: row.get("list_id")?,
    })
}

fn ensure_list_exists(conn: &Connection, list_id: ListId) -> RepoResult<()> {
    let found = conn
        .query_row(
            "SELECT id FROM todo_lists WHERE id = ?1;",
            [list_id],
            |row| row.get::<_, ListId>(0),
        )
        .optional()?;

    match found {
        Some(_) => Ok(()),
        None => Err(RepoError::ListNotFound(list_id)),
    }
}

/// Next completion stamp: wall-clock millis, bumped past the latest stamp
/// already stored.
fn next_done_stamp(conn: &Connection) -> RepoResult<i64> {
    let latest: Option<i64> =
        conn.query_row("SELECT MAX(done_date) FROM todo_items;", [], |row| {
            row.get(0)
        })?;
    let now = now_epoch_ms();

    Ok(match latest {
        Some(latest) if latest >= now => latest + 1,
        _ => now,
    })
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
