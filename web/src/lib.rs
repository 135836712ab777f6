//! Axum HTTP API for the todo summary backend.
//!
//! The web layer is the only place that knows about HTTP. Handlers parse
//! the request, call [`todo_summary_core::TodoService`] or the configured
//! summary strategy and notifier, and turn every error into a status code
//! through [`AppError`].
//!
//! # Request Flow
//!
//! 1. **Correlation id** attached by [`middleware::correlation_id_layer`]
//! 2. **Extract** path ids ([`TodoPath`]) and JSON bodies ([`JsonBody`])
//! 3. **Call** the service, composer or notifier held in [`AppState`]
//! 4. **Map** the result or error to an HTTP response
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use todo_summary_core::{LogNotifier, TemplateSummary, TodoService};
//! use todo_summary_web::{build_router, AppState};
//!
//! let state = AppState::new(
//!     TodoService::new(store),
//!     Arc::new(TemplateSummary),
//!     Arc::new(LogNotifier),
//!     "development",
//! );
//! let app = build_router(state);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

// Re-export key types for convenience
pub use error::AppError;
pub use extractors::{JsonBody, TodoPath};
pub use middleware::{CORRELATION_ID_HEADER, correlation_id_layer};
pub use router::build_router;
pub use state::AppState;
