//! `/items` handlers.

use crate::error::ApiError;
use crate::routes::JsonBody;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use todolist_core::{
    CreateItemRequest, ItemId, ItemStore, NewTodoItem, TodoItem, TodoItemUpdate,
    UpdateItemRequest,
};

pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<TodoItem>>, ApiError> {
    let items = state.with_db(|conn| Ok(ItemStore::new(conn).get_all()?))?;
    Ok(Json(items))
}

pub async fn item_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoItem>>, ApiError> {
    let items = state.with_db(|conn| Ok(ItemStore::new(conn).get_history()?))?;
    Ok(Json(items))
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Result<Json<TodoItem>, ApiError> {
    state
        .with_db(|conn| Ok(ItemStore::new(conn).get(id)?))?
        .map(Json)
        .ok_or_else(|| item_not_found(id))
}

pub async fn create_item(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateItemRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new_item = NewTodoItem::from(request);
    let item = state.with_db(|conn| Ok(ItemStore::new(conn).add(&new_item)?))?;
    let location = format!("/items/{}", item.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(item)))
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
    JsonBody(request): JsonBody<UpdateItemRequest>,
) -> Result<Json<TodoItem>, ApiError> {
    if request.id != id {
        return Err(ApiError::BadRequest(format!(
            "path id {id} does not match body id {}",
            request.id
        )));
    }

    let update = TodoItemUpdate::from(request);
    state
        .with_db(|conn| Ok(ItemStore::new(conn).update(&update)?))?
        .map(Json)
        .ok_or_else(|| item_not_found(id))
}

pub async fn mark_item_done(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Result<StatusCode, ApiError> {
    state
        .with_db(|conn| Ok(ItemStore::new(conn).mark_done(id)?))?
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| item_not_found(id))
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<ItemId>,
) -> Result<StatusCode, ApiError> {
    state.with_db(|conn| {
        let store = ItemStore::new(conn);
        if !store.exists(id)? {
            return Err(item_not_found(id));
        }
        store.remove(id)?;
        Ok(())
    })?;

    Ok(StatusCode::NO_CONTENT)
}

fn item_not_found(id: ItemId) -> ApiError {
    ApiError::NotFound(format!("no to-do item with id {id} found"))
}
