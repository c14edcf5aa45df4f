//! HTTP error mapping for store outcomes.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde_json::json;
use std::fmt::{Display, Formatter};
use todolist_core::RepoError;

/// Error returned by handlers; rendered as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    /// Detail is logged, never sent to the client.
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadRequest(message) | Self::NotFound(message) | Self::Internal(message) => {
                write!(f, "{message}")
            }
        }
    }
}

/// Default mapping: a missing list on an item write is bad input, a missing
/// item on removal is not-found. List removal maps `ListNotFound` itself.
impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(_) | RepoError::ListNotFound(_) => {
                Self::BadRequest(value.to_string())
            }
            RepoError::ItemNotFound(_) => Self::NotFound(value.to_string()),
            RepoError::Db(_) | RepoError::InvalidData(_) => Self::Internal(value.to_string()),
        }
    }
}

/// Malformed bodies, missing fields and wrong field types are bad input.
impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::BadRequest(value.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Internal(detail) => {
                error!("event=http_error module=http status=error error={detail}");
                "internal server error".to_string()
            }
            Self::BadRequest(message) | Self::NotFound(message) => message,
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todolist_core::ValidationError;

    #[test]
    fn repo_errors_map_to_statuses() {
        let cases = [
            (
                RepoError::Validation(ValidationError::ListTitleLength { chars: 0 }),
                StatusCode::BAD_REQUEST,
            ),
            (RepoError::ListNotFound(9), StatusCode::BAD_REQUEST),
            (RepoError::ItemNotFound(9), StatusCode::NOT_FOUND),
            (
                RepoError::InvalidData("bad row".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }

    #[test]
    fn internal_detail_is_not_exposed() {
        let response = ApiError::Internal("disk I/O error".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
