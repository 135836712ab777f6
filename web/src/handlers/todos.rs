//! Todo CRUD endpoints.
//!
//! | Method | Path             | Success                  |
//! |--------|------------------|--------------------------|
//! | GET    | `/api/todos`     | 200, todos newest first  |
//! | POST   | `/api/todos`     | 201, created todo        |
//! | PUT    | `/api/todos/:id` | 200, updated todo        |
//! | DELETE | `/api/todos/:id` | 200, confirmation        |

use crate::error::AppError;
use crate::extractors::{JsonBody, TodoPath};
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use todo_summary_core::{Todo, TodoPatch};

/// Body of `POST /api/todos`.
///
/// A missing or `null` title is treated as empty so it fails validation
/// with `Title is required` rather than a deserialization error. Other fields
/// (`id`, `completed`, `created_at`) are ignored: the store assigns them.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    /// Title, trimmed before storing
    #[serde(default)]
    pub title: Option<String>,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}

/// Body returned by `DELETE /api/todos/:id`.
#[derive(Debug, Serialize)]
pub struct DeleteTodoResponse {
    /// Confirmation text
    pub message: &'static str,
}

/// `GET /api/todos`
///
/// # Errors
///
/// 500 if the store fails.
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = state.todos.get_all_todos().await?;
    Ok(Json(todos))
}

/// `POST /api/todos`
///
/// # Errors
///
/// 400 for a blank title, 500 if the store fails.
pub async fn create_todo(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let todo = state
        .todos
        .create_todo(
            request.title.as_deref().unwrap_or_default(),
            request.description.as_deref(),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// `PUT /api/todos/:id`
///
/// Accepts any subset of `title`, `description` and `completed`.
///
/// # Errors
///
/// 400 for unknown fields or a blank title, 404 for an unknown id, 500 if
/// the store fails.
pub async fn update_todo(
    State(state): State<AppState>,
    TodoPath(id): TodoPath,
    JsonBody(patch): JsonBody<TodoPatch>,
) -> Result<Json<Todo>, AppError> {
    let todo = state.todos.update_todo(id, patch).await?;
    Ok(Json(todo))
}

/// `DELETE /api/todos/:id`
///
/// # Errors
///
/// 404 for an unknown id, 500 if the store fails.
pub async fn delete_todo(
    State(state): State<AppState>,
    TodoPath(id): TodoPath,
) -> Result<Json<DeleteTodoResponse>, AppError> {
    state.todos.delete_todo(id).await?;
    Ok(Json(DeleteTodoResponse {
        message: "Todo deleted successfully",
    }))
}
