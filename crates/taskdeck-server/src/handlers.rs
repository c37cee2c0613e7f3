use crate::app::AppState;
use crate::error::ApiError;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use taskdeck_core::task::{Task, TaskDraft};

pub async fn welcome() -> &'static str {
    "Welcome to the Task API"
}

pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = state.store.list()?;
    Ok(Json(tasks))
}

/// POST body. Both fields are optional so that a structurally valid JSON
/// object with missing fields reports the contract error rather than a
/// decode error.
#[derive(Deserialize)]
pub struct CreateTaskBody {
    title: Option<String>,
    description: Option<String>,
}

pub async fn create_task(
    State(state): State<AppState>,
    body: String,
) -> Result<impl IntoResponse, ApiError> {
    let body: CreateTaskBody = serde_json::from_str(&body)
        .map_err(|_| ApiError::BadRequest("Invalid JSON body".into()))?;

    let draft = match (body.title, body.description) {
        (Some(title), Some(description)) if !title.is_empty() && !description.is_empty() => {
            TaskDraft { title, description }
        }
        _ => {
            return Err(ApiError::BadRequest(
                "Task must have a title and a description".into(),
            ))
        }
    };

    let task = state.store.create(draft)?;
    tracing::info!(id = task.id, "task created");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Task added", "newTask": task })),
    ))
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" })))
}
