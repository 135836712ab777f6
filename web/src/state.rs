//! Application state for Axum handlers.

use std::sync::Arc;
use todo_summary_core::{Notifier, SummaryStrategy, TodoService};

/// Application state shared across all HTTP handlers.
///
/// The summary strategy and notifier are chosen once at startup; handlers
/// never switch between implementations.
#[derive(Clone)]
pub struct AppState {
    /// Todo validation and persistence.
    pub todos: TodoService,
    /// Composes the summary text.
    pub summarizer: Arc<dyn SummaryStrategy>,
    /// Delivers a composed summary.
    pub notifier: Arc<dyn Notifier>,
    /// Deployment name reported by `/health`.
    pub environment: String,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(
        todos: TodoService,
        summarizer: Arc<dyn SummaryStrategy>,
        notifier: Arc<dyn Notifier>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            todos,
            summarizer,
            notifier,
            environment: environment.into(),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("todos", &self.todos)
            .field("summarizer", &self.summarizer.name())
            .field("notifier", &self.notifier.name())
            .field("environment", &self.environment)
            .finish()
    }
}
