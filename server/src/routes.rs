//! HTTP surface of the task service.

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, Method, StatusCode},
    routing::get,
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::model::{Task, TaskPayload};
use crate::store::TaskStore;

/// Origin the Trunk dev server runs on; the browser UI calls from there.
const UI_ORIGIN: &str = "http://localhost:8080";

pub fn build_router(store: TaskStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(HeaderValue::from_static(UI_ORIGIN))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route(
            "/api/tasks/:id",
            get(get_task).put(replace_task).delete(delete_task),
        )
        .with_state(store)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn list_tasks(State(store): State<TaskStore>) -> Json<Vec<Task>> {
    Json(store.list().await)
}

async fn get_task(
    State(store): State<TaskStore>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, StatusCode> {
    store.get(id).await.map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn create_task(
    State(store): State<TaskStore>,
    Json(payload): Json<TaskPayload>,
) -> Json<Task> {
    let task = store.create(payload).await;
    info!(id = task.id, title = %task.title, "task created");
    Json(task)
}

async fn replace_task(
    State(store): State<TaskStore>,
    Path(id): Path<i64>,
    Json(payload): Json<TaskPayload>,
) -> Result<Json<Task>, StatusCode> {
    match store.replace(id, payload).await {
        Some(task) => {
            info!(id, completed = task.completed, "task replaced");
            Ok(Json(task))
        }
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn delete_task(State(store): State<TaskStore>, Path(id): Path<i64>) -> StatusCode {
    if store.remove(id).await {
        info!(id, "task deleted");
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}
