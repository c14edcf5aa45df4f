//! HTTP boundary for the to-do list API.
//!
//! # Responsibility
//! - Parse JSON requests into store inputs and run exactly one store
//!   operation per request.
//! - Translate store outcomes (value, absence, error) into status codes.
//!
//! # Invariants
//! - The shared connection lock is never held across an `.await`.

use axum::middleware::from_fn;
use axum::routing::{get, put};
use axum::Router;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub mod config;
pub mod error;
mod middleware;
mod routes;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;

/// Shared handler state: one migrated SQLite connection.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }

    /// Runs `op` while holding the connection lock.
    pub fn with_db<T>(
        &self,
        op: impl FnOnce(&Connection) -> Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        let conn = self
            .db
            .lock()
            .map_err(|err| ApiError::Internal(format!("database lock poisoned: {err}")))?;
        op(&conn)
    }
}

/// Builds the router over an already-migrated connection.
pub fn app(conn: Connection) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route(
            "/items",
            get(routes::items::list_items).post(routes::items::create_item),
        )
        .route("/items/history", get(routes::items::item_history))
        .route("/items/markDone/{id}", put(routes::items::mark_item_done))
        .route(
            "/items/{id}",
            get(routes::items::get_item)
                .put(routes::items::update_item)
                .delete(routes::items::delete_item),
        )
        .route(
            "/lists",
            get(routes::lists::list_lists).post(routes::lists::create_list),
        )
        .route(
            "/lists/{id}",
            get(routes::lists::get_list)
                .put(routes::lists::update_list)
                .delete(routes::lists::delete_list),
        )
        .layer(from_fn(middleware::log_requests))
        .with_state(AppState::new(conn))
}

pub async fn run(listener: TcpListener, conn: Connection) -> Result<(), std::io::Error> {
    axum::serve(listener, app(conn)).await
}
