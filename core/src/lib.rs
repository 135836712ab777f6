//! # Todo Summary Core
//!
//! Domain types and services for the todo summary backend.
//!
//! Everything with I/O sits behind a trait so the HTTP layer, the server
//! binary and the tests can plug in different implementations:
//!
//! ```text
//! HTTP API ──▶ TodoService ──▶ dyn TodoStore  (Postgres / in-memory)
//!     │
//!     └──────▶ dyn SummaryStrategy (template / LLM) ──▶ dyn Notifier (Slack / log)
//! ```
//!
//! ## Modules
//!
//! - [`todo`]: the `Todo` entity, creation fields and partial updates
//! - [`store`]: the record store adapter trait and its errors
//! - [`service`]: validation and orchestration over a store
//! - [`summary`]: summary composition strategies
//! - [`notifier`]: delivery of a composed summary
//! - [`environment`]: injectable clock

pub mod notifier;
pub mod service;
pub mod store;
pub mod summary;
pub mod todo;

/// Environment module - injectable dependencies
///
/// Time is abstracted so stores and notifiers can be driven by a fixed
/// clock in tests.
pub mod environment {
    use chrono::{DateTime, Utc};

    /// Clock trait - abstracts time operations for testability
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Wall clock backed by [`Utc::now`].
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }
}

// Re-export commonly used types
pub use notifier::{LogNotifier, NotifyError, Notifier};
pub use service::{TodoError, TodoService};
pub use store::{StoreError, TodoStore};
pub use summary::{LlmSummary, SummaryError, SummaryStrategy, TemplateSummary};
pub use todo::{NewTodo, Todo, TodoId, TodoPatch};
