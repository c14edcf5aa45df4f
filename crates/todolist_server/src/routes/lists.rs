//! `/lists` handlers. Every list in a response carries its items.

use crate::error::ApiError;
use crate::routes::JsonBody;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use todolist_core::{
    CreateListRequest, ListId, ListStore, NewTodoList, RepoError, TodoList, TodoListUpdate,
    UpdateListRequest,
};

pub async fn list_lists(State(state): State<AppState>) -> Result<Json<Vec<TodoList>>, ApiError> {
    let lists = state.with_db(|conn| Ok(ListStore::new(conn).get_all()?))?;
    Ok(Json(lists))
}

pub async fn get_list(
    State(state): State<AppState>,
    Path(id): Path<ListId>,
) -> Result<Json<TodoList>, ApiError> {
    state
        .with_db(|conn| Ok(ListStore::new(conn).get(id)?))?
        .map(Json)
        .ok_or_else(|| list_not_found(id))
}

pub async fn create_list(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateListRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new_list = NewTodoList::from(request);
    let list = state.with_db(|conn| Ok(ListStore::new(conn).add(&new_list)?))?;
    let location = format!("/lists/{}", list.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(list)))
}

pub async fn update_list(
    State(state): State<AppState>,
    Path(id): Path<ListId>,
    JsonBody(request): JsonBody<UpdateListRequest>,
) -> Result<StatusCode, ApiError> {
    if request.id != id {
        return Err(ApiError::BadRequest(format!(
            "path id {id} does not match body id {}",
            request.id
        )));
    }

    let update = TodoListUpdate::from(request);
    state
        .with_db(|conn| Ok(ListStore::new(conn).update(&update)?))?
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| list_not_found(id))
}

pub async fn delete_list(
    State(state): State<AppState>,
    Path(id): Path<ListId>,
) -> Result<StatusCode, ApiError> {
    state.with_db(|conn| {
        let store = ListStore::new(conn);
        if !store.exists(id)? {
            return Err(list_not_found(id));
        }
        // A missing list here is not-found, not a bad reference.
        store.remove(id).map_err(|err| match err {
            RepoError::ListNotFound(id) => list_not_found(id),
            other => ApiError::from(other),
        })?;
        Ok(())
    })?;

    Ok(StatusCode::NO_CONTENT)
}

fn list_not_found(id: ListId) -> ApiError {
    ApiError::NotFound(format!("no to-do list with id {id} found"))
}
