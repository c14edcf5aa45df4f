//! Route handlers, one module per resource.

pub mod items;
pub mod lists;

use crate::error::ApiError;
use axum::extract::FromRequest;
use axum::Json;
use serde_json::{json, Value};

/// JSON body extractor whose rejections render as `ApiError` (400).
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": todolist_core::core_version(),
    }))
}
