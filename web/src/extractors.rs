//! Custom Axum extractors.
//!
//! - [`JsonBody`]: JSON request body whose rejections use the API's error shape
//! - [`TodoPath`]: the `:id` path segment parsed as a [`TodoId`]
//!
//! # Examples
//!
//! ```ignore
//! async fn update_todo(
//!     State(state): State<AppState>,
//!     TodoPath(id): TodoPath,
//!     JsonBody(patch): JsonBody<TodoPatch>,
//! ) -> Result<Json<Todo>, AppError> {
//!     Ok(Json(state.todos.update_todo(id, patch).await?))
//! }
//! ```

use crate::error::{AppError, TODO_NOT_FOUND};
use axum::{
    Json, async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use todo_summary_core::TodoId;

/// JSON request body.
///
/// Behaves like [`axum::Json`] but answers malformed bodies, unknown
/// fields and wrong content types with `400 {"error": ...}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::bad_request(rejection.body_text())),
        }
    }
}

/// Todo id taken from the `:id` path segment.
///
/// An id that is not a valid UUID cannot name an existing todo, so it is
/// rejected with `404 Todo not found`.
#[derive(Debug, Clone, Copy)]
pub struct TodoPath(pub TodoId);

#[async_trait]
impl<S> FromRequestParts<S> for TodoPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::not_found(TODO_NOT_FOUND))?;

        raw.parse::<TodoId>()
            .map(Self)
            .map_err(|_| AppError::not_found(TODO_NOT_FOUND))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, routing::get};
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Named {
        name: String,
    }

    #[allow(clippy::unused_async)]
    async fn echo_name(JsonBody(body): JsonBody<Named>) -> String {
        body.name
    }

    #[allow(clippy::unused_async)]
    async fn echo_id(TodoPath(id): TodoPath) -> String {
        id.to_string()
    }

    fn app() -> Router {
        Router::new()
            .route("/named", axum::routing::post(echo_name))
            .route("/todos/:id", get(echo_id))
    }

    fn post_json(body: &str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/named")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn error_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        value["error"].as_str().unwrap_or_default().to_string()
    }

    #[tokio::test]
    async fn test_json_body_accepts_valid_payload() {
        let response = app().oneshot(post_json(r#"{"name":"milk"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_json_body_rejects_unknown_fields_with_400() {
        let response = app()
            .oneshot(post_json(r#"{"name":"milk","id":"x"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(error_text(response).await.contains("unknown field"));
    }

    #[tokio::test]
    async fn test_json_body_rejects_malformed_json_with_400() {
        let response = app().oneshot(post_json("{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!error_text(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_todo_path_parses_uuid() {
        let id = TodoId::new();
        let request = axum::http::Request::builder()
            .uri(format!("/todos/{id}"))
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_todo_path_rejects_malformed_id_as_not_found() {
        let request = axum::http::Request::builder()
            .uri("/todos/42")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(error_text(response).await, TODO_NOT_FOUND);
    }
}
