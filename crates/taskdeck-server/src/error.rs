use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use taskdeck_store::error::StoreError;

/// Maps task store failures onto the API's status/body contract.
#[derive(Debug)]
pub enum ApiError {
    /// Storage absent or empty: 404 with the legacy body.
    NoTasks,
    /// Caller mistake: 400 with the error message.
    BadRequest(String),
    /// Unknown task id: 404 with the error message.
    NotFound(String),
    /// Anything else: 500 with a generic body.
    Internal,
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NoStorage | StoreError::EmptyCollection => ApiError::NoTasks,
            StoreError::InvalidArgument(_)
            | StoreError::DuplicateTask(_)
            | StoreError::InvalidId(_) => ApiError::BadRequest(e.to_string()),
            StoreError::TaskNotFound(_) => ApiError::NotFound(e.to_string()),
            StoreError::Io(_) | StoreError::Json(_) | StoreError::LockConflict(_) => {
                tracing::error!("store failure: {}", e);
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NoTasks => (
                StatusCode::NOT_FOUND,
                "No item currently in memory".to_string(),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error".to_string(),
            ),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
