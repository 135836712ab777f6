//! `POST /api/summarize`: compose a summary of every todo and deliver it.

use crate::error::AppError;
use crate::state::AppState;
use axum::{Json, extract::State};
use serde::Serialize;
use todo_summary_core::SummaryError;

/// Body returned after a successful delivery.
#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    /// Confirmation naming where the summary went
    pub message: String,
    /// The text that was delivered
    pub summary: String,
}

/// `POST /api/summarize`
///
/// Lists all todos, composes the summary, then hands it to the notifier.
/// The summary is returned only once delivery succeeded.
///
/// # Errors
///
/// - 400 `No todos found to summarize` when the list is empty; the composer
///   is not called
/// - 500 when composition or delivery fails
pub async fn summarize(State(state): State<AppState>) -> Result<Json<SummarizeResponse>, AppError> {
    let todos = state.todos.get_all_todos().await?;
    if todos.is_empty() {
        return Err(SummaryError::EmptyInput.into());
    }

    let summary = state.summarizer.compose(&todos).await?;
    tracing::info!(
        strategy = state.summarizer.name(),
        todos = todos.len(),
        "Summary composed"
    );

    state.notifier.deliver(&summary).await?;
    tracing::info!(notifier = state.notifier.name(), "Summary delivered");

    Ok(Json(SummarizeResponse {
        message: confirmation(state.notifier.name()),
        summary,
    }))
}

fn confirmation(notifier: &str) -> String {
    match notifier {
        "slack" => "Summary sent to Slack successfully".to_string(),
        "log" => "Summary written to the server log".to_string(),
        other => format!("Summary delivered via {other}"),
    }
}
