//! Summary composition.
//!
//! A deployment picks exactly one [`SummaryStrategy`]: the deterministic
//! [`TemplateSummary`] or the generated [`LlmSummary`]. There is no fallback
//! from one to the other, so a generation failure is always reported as
//! [`SummaryError::GenerationFailed`] and never disguised as template output.

use crate::todo::Todo;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;
use todo_summary_anthropic::{AnthropicClient, Message, MessagesRequest};

/// Errors produced while composing a summary.
#[derive(Error, Debug)]
pub enum SummaryError {
    /// The todo set was empty. Callers reject this before composing.
    #[error("No todos found to summarize")]
    EmptyInput,

    /// The text-generation API failed or returned no content.
    #[error("Summary generation failed: {0}")]
    GenerationFailed(String),
}

/// Boxed future returned by [`SummaryStrategy::compose`].
pub type SummaryFuture<'a> = Pin<Box<dyn Future<Output = Result<String, SummaryError>> + Send + 'a>>;

/// Turns the current todo set into a single human-readable text block.
pub trait SummaryStrategy: Send + Sync {
    /// Short name for logs and health output (`"template"`, `"llm"`).
    fn name(&self) -> &'static str;

    /// Compose a summary of `todos`, which are in list order (newest first).
    ///
    /// # Errors
    ///
    /// - `EmptyInput` when `todos` is empty
    /// - `GenerationFailed` when a generating strategy gets no usable text
    fn compose<'a>(&'a self, todos: &'a [Todo]) -> SummaryFuture<'a>;
}

/// Deterministic report built from a fixed template.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateSummary;

impl TemplateSummary {
    /// Render the report synchronously.
    ///
    /// Sections, in order: header, counts, pending titles, completed titles,
    /// closing line. Titles keep the input order.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` when `todos` is empty.
    pub fn render(todos: &[Todo]) -> Result<String, SummaryError> {
        if todos.is_empty() {
            return Err(SummaryError::EmptyInput);
        }

        let (completed, pending): (Vec<&Todo>, Vec<&Todo>) =
            todos.iter().partition(|todo| todo.completed);

        let report = [
            "📋 Todo Summary Report".to_string(),
            String::new(),
            "📊 Overview:".to_string(),
            format!("• Total tasks: {}", todos.len()),
            format!("• Completed: {}", completed.len()),
            format!("• Pending: {}", pending.len()),
            String::new(),
            "📝 Pending Tasks:".to_string(),
            title_list(&pending),
            String::new(),
            "✅ Completed Tasks:".to_string(),
            title_list(&completed),
            String::new(),
            format!("🎯 {}", closing_line(pending.len())),
        ];

        Ok(report.join("\n"))
    }
}

fn title_list(todos: &[&Todo]) -> String {
    if todos.is_empty() {
        return "• None".to_string();
    }
    todos
        .iter()
        .map(|todo| format!("• {}", todo.title))
        .collect::<Vec<_>>()
        .join("\n")
}

fn closing_line(pending: usize) -> String {
    match pending {
        0 => "All tasks completed! 🎉".to_string(),
        1 => "Keep up the great work! You have 1 task left to complete.".to_string(),
        n => format!("Keep up the great work! You have {n} tasks left to complete."),
    }
}

impl SummaryStrategy for TemplateSummary {
    fn name(&self) -> &'static str {
        "template"
    }

    fn compose<'a>(&'a self, todos: &'a [Todo]) -> SummaryFuture<'a> {
        Box::pin(std::future::ready(Self::render(todos)))
    }
}

/// Summary written by a hosted language model.
#[derive(Debug, Clone)]
pub struct LlmSummary {
    client: AnthropicClient,
    model: String,
    max_tokens: u32,
}

impl LlmSummary {
    /// Default completion budget for a summary.
    pub const DEFAULT_MAX_TOKENS: u32 = 500;

    /// Create a strategy that asks `model` through `client`.
    #[must_use]
    pub fn new(client: AnthropicClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            max_tokens: Self::DEFAULT_MAX_TOKENS,
        }
    }

    /// Builder: set the completion budget.
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Build the prompt sent to the language model.
///
/// One line per todo carrying title, description (when present) and state.
#[must_use]
pub fn build_prompt(todos: &[Todo]) -> String {
    let listing = todos.iter().map(prompt_line).collect::<Vec<_>>().join("\n");

    format!(
        "Please summarize the following todo list and provide insights:\n\n\
         {listing}\n\n\
         Summarize the todos in a clear, concise way. Include:\n\
         1. Total count of todos (pending vs completed)\n\
         2. Group similar tasks if any\n\
         3. Suggestion for prioritization\n\
         4. A motivational message"
    )
}

fn prompt_line(todo: &Todo) -> String {
    let state = if todo.completed { "Completed" } else { "Pending" };
    if todo.description.is_empty() {
        format!("- {} ({state})", todo.title)
    } else {
        format!("- {}: {} ({state})", todo.title, todo.description)
    }
}

impl SummaryStrategy for LlmSummary {
    fn name(&self) -> &'static str {
        "llm"
    }

    fn compose<'a>(&'a self, todos: &'a [Todo]) -> SummaryFuture<'a> {
        Box::pin(async move {
            if todos.is_empty() {
                return Err(SummaryError::EmptyInput);
            }

            let request = MessagesRequest::new(vec![Message::user(build_prompt(todos))])
                .with_model(self.model.clone())
                .with_max_tokens(self.max_tokens)
                .with_temperature(0.7);

            let response = self
                .client
                .messages(request)
                .await
                .map_err(|e| SummaryError::GenerationFailed(e.to_string()))?;

            let text = response.text();
            let text = text.trim();
            if text.is_empty() {
                return Err(SummaryError::GenerationFailed(
                    "model returned no text".to_string(),
                ));
            }

            tracing::debug!(
                model = %self.model,
                output_tokens = response.usage.output_tokens,
                "Generated summary"
            );
            Ok(text.to_string())
        })
    }
}
