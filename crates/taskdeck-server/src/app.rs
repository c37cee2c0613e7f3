use crate::handlers;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use taskdeck_store::store::TaskStore;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TaskStore>,
}

/// Route table (CORS allowed from any origin):
///
/// - `GET  /`       — plain-text welcome
/// - `GET  /tasks`  — full collection as a JSON array
/// - `POST /tasks`  — create from `{title, description}`
/// - anything else  — 404 JSON
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::welcome))
        .route(
            "/tasks",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .fallback(handlers::not_found)
        .layer(cors)
        .with_state(state)
}
