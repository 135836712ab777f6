//! Route table and middleware stack.

use crate::error::AppError;
use crate::handlers::{health, summary, todos};
use crate::middleware::correlation_id_layer;
use crate::state::AppState;
use axum::{
    Router,
    http::{Method, Uri},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Build the application router.
///
/// # Routes
///
/// - `GET /` - welcome message
/// - `GET /health` - liveness check
/// - `GET /api/todos` - list todos, newest first
/// - `POST /api/todos` - create a todo
/// - `PUT /api/todos/:id` - update a todo
/// - `DELETE /api/todos/:id` - delete a todo
/// - `POST /api/summarize` - compose and deliver a summary
///
/// Anything else, including a known path with the wrong method, answers
/// `404 {"error": "Route not found"}`.
///
/// # Example
///
/// ```rust,ignore
/// let app = build_router(state);
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
/// axum::serve(listener, app).await?;
/// ```
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/todos",
            get(todos::list_todos)
                .post(todos::create_todo)
                .fallback(route_not_found),
        )
        .route(
            "/todos/:id",
            put(todos::update_todo)
                .delete(todos::delete_todo)
                .fallback(route_not_found),
        )
        .route(
            "/summarize",
            post(summary::summarize).fallback(route_not_found),
        );

    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    Router::new()
        .route("/", get(health::welcome).fallback(route_not_found))
        .route(
            "/health",
            get(health::health_check).fallback(route_not_found),
        )
        .nest("/api", api)
        .fallback(route_not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(correlation_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[allow(clippy::unused_async)]
async fn route_not_found(method: Method, uri: Uri) -> AppError {
    tracing::debug!(%method, %uri, "Route not found");
    AppError::not_found("Route not found")
}

#[allow(clippy::needless_pass_by_value)]
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(panic = %detail, "Request handler panicked");

    AppError::internal("Something went wrong!").into_response()
}
