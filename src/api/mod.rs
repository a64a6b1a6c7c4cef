//! HTTP surface of taskboard.
//!
//! | Method | Path                       | Handler                      |
//! |--------|----------------------------|------------------------------|
//! | GET    | `/api/tasks`               | [`handlers::list_tasks`]     |
//! | POST   | `/api/tasks`               | [`handlers::create_task`]    |
//! | GET    | `/api/tasks/{id}`          | [`handlers::get_task`]       |
//! | PUT    | `/api/tasks/{id}`          | [`handlers::update_task`]    |
//! | DELETE | `/api/tasks/{id}`          | [`handlers::delete_task`]    |
//! | PATCH  | `/api/tasks/{id}/complete` | [`handlers::complete_task`]  |
//! | POST   | `/submit-task`             | [`handlers::submit_task`]    |
//! | GET    | `/`                        | `index.html` from the static directory |
//! | GET    | `/static/{path}`           | files under the static directory |

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use error::ErrorBody;
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Shared, read-only application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config: Arc::new(config) }
    }
}

/// Builds the complete router: task API, form endpoint and static files.
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/api/tasks", get(handlers::list_tasks).post(handlers::create_task))
        .route(
            "/api/tasks/{id}",
            get(handlers::get_task).put(handlers::update_task).delete(handlers::delete_task),
        )
        .route("/api/tasks/{id}/complete", patch(handlers::complete_task))
        .route("/submit-task", post(handlers::submit_task))
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(&static_dir))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Last-resort conversion of a handler panic into the generic JSON error.
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    msg_error!(Message::UnexpectedError(detail.to_string()));

    let body = ErrorBody {
        error: Message::InternalServerError.to_string(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
