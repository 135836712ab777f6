//! Doubles for the summary and notification seams.

use std::sync::{Arc, Mutex};
use todo_summary_core::notifier::{NotifyError, NotifyFuture, Notifier};
use todo_summary_core::summary::{SummaryError, SummaryFuture, SummaryStrategy};
use todo_summary_core::todo::Todo;

/// Summary strategy that returns a canned outcome.
///
/// Counts how often it was asked, so tests can assert the composer was
/// never reached.
#[derive(Debug, Clone)]
pub struct ScriptedSummary {
    outcome: Result<String, String>,
    calls: Arc<Mutex<usize>>,
}

impl ScriptedSummary {
    /// Always succeed with `text`.
    #[must_use]
    pub fn returning(text: impl Into<String>) -> Self {
        Self {
            outcome: Ok(text.into()),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Always fail with `SummaryError::GenerationFailed(reason)`.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(reason.into()),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of `compose` calls so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.lock().map_or(0, |calls| *calls)
    }
}

impl SummaryStrategy for ScriptedSummary {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn compose<'a>(&'a self, todos: &'a [Todo]) -> SummaryFuture<'a> {
        if let Ok(mut calls) = self.calls.lock() {
            *calls += 1;
        }
        let result = if todos.is_empty() {
            Err(SummaryError::EmptyInput)
        } else {
            self.outcome
                .clone()
                .map_err(SummaryError::GenerationFailed)
        };
        Box::pin(std::future::ready(result))
    }
}

/// Notifier that records every delivered summary in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    delivered: Arc<Mutex<Vec<String>>>,
    failure: Option<String>,
}

impl RecordingNotifier {
    /// Notifier that accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifier that rejects everything with `NotifyError::DeliveryFailed(reason)`.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            delivered: Arc::new(Mutex::new(Vec::new())),
            failure: Some(reason.into()),
        }
    }

    /// Summaries delivered so far, oldest first.
    #[must_use]
    pub fn delivered(&self) -> Vec<String> {
        self.delivered
            .lock()
            .map(|delivered| delivered.clone())
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn deliver<'a>(&'a self, summary: &'a str) -> NotifyFuture<'a> {
        let result = match &self.failure {
            Some(reason) => Err(NotifyError::DeliveryFailed(reason.clone())),
            None => {
                if let Ok(mut delivered) = self.delivered.lock() {
                    delivered.push(summary.to_string());
                }
                Ok(())
            }
        };
        Box::pin(std::future::ready(result))
    }
}
