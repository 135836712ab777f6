//! View state for a todo list screen.
//!
//! [`TodoBoard`] owns the list the user sees, the last delivered summary and
//! a queue of notices. It only changes the list after the server answered:
//! a created todo is prepended, an updated one replaces its old copy, a
//! deleted one is dropped. Failures leave the list as it was.
//!
//! Each target (the list, the add form, one todo, the summary button) allows
//! one request at a time. A second request for a busy target fails with
//! [`ClientError::Busy`] without reaching the server, which is what a UI
//! does by disabling the button.

use crate::api::ApiClient;
use crate::error::ClientError;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use todo_summary_core::{Todo, TodoId, TodoPatch};

/// Something a request can keep busy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Loading the whole list
    List,
    /// The add form
    Form,
    /// One todo (toggle, edit and delete share it)
    Todo(TodoId),
    /// The summary button
    Summary,
}

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// The action succeeded
    Success,
    /// The action failed
    Error,
}

/// A transient message for the user (a toast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,
    /// Text to show
    pub text: String,
}

#[derive(Debug, Default)]
struct BoardState {
    todos: Vec<Todo>,
    summary: Option<String>,
    load_error: Option<String>,
    busy: HashSet<Target>,
    notices: Vec<Notice>,
}

impl BoardState {
    fn notify(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notices.push(Notice {
            level,
            text: text.into(),
        });
    }

    fn replace(&mut self, todo: Todo) {
        if let Some(slot) = self.todos.iter_mut().find(|t| t.id == todo.id) {
            *slot = todo;
        }
    }
}

/// Releases a busy target when dropped.
struct BusyGuard {
    state: Arc<Mutex<BoardState>>,
    target: Target,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .busy
            .remove(&self.target);
    }
}

/// Todo list view state backed by the API.
///
/// Cloning shares the state, so a renderer can read while a request is in
/// flight.
#[derive(Debug, Clone)]
pub struct TodoBoard {
    api: ApiClient,
    state: Arc<Mutex<BoardState>>,
}

impl TodoBoard {
    /// Create an empty board. Call [`TodoBoard::refresh`] to load the list.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(BoardState::default())),
        }
    }

    fn state(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self, target: Target) -> Result<BusyGuard, ClientError> {
        if !self.state().busy.insert(target) {
            return Err(ClientError::Busy);
        }
        Ok(BusyGuard {
            state: Arc::clone(&self.state),
            target,
        })
    }

    /// Todos as last confirmed by the server, newest first.
    #[must_use]
    pub fn todos(&self) -> Vec<Todo> {
        self.state().todos.clone()
    }

    /// Last delivered summary.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        self.state().summary.clone()
    }

    /// Message shown in place of the list after a failed load.
    #[must_use]
    pub fn load_error(&self) -> Option<String> {
        self.state().load_error.clone()
    }

    /// True while a request for `target` is in flight.
    #[must_use]
    pub fn is_busy(&self, target: Target) -> bool {
        self.state().busy.contains(&target)
    }

    /// The summary button is enabled only for a non-empty, idle list.
    #[must_use]
    pub fn can_summarize(&self) -> bool {
        let state = self.state();
        !state.todos.is_empty() && !state.busy.contains(&Target::Summary)
    }

    /// Drain pending notices.
    pub fn take_notices(&self) -> Vec<Notice> {
        std::mem::take(&mut self.state().notices)
    }

    /// Reload the list from the server.
    ///
    /// # Errors
    ///
    /// Returns the request error; the previous list is kept.
    pub async fn refresh(&self) -> Result<(), ClientError> {
        let _guard = self.begin(Target::List)?;
        let result = self.api.list_todos().await;

        let mut state = self.state();
        match result {
            Ok(todos) => {
                state.todos = todos;
                state.load_error = None;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to fetch todos");
                state.load_error = Some("Failed to fetch todos. Please try again later.".to_string());
                Err(err)
            }
        }
    }

    /// Create a todo and prepend it.
    ///
    /// # Errors
    ///
    /// `Invalid` for a blank title (no request is made), otherwise the
    /// request error.
    pub async fn add(&self, title: &str, description: Option<&str>) -> Result<Todo, ClientError> {
        if title.trim().is_empty() {
            return Err(ClientError::Invalid("Title is required".to_string()));
        }
        let _guard = self.begin(Target::Form)?;
        let result = self.api.create_todo(title, description).await;

        let mut state = self.state();
        match result {
            Ok(todo) => {
                state.todos.insert(0, todo.clone());
                state.notify(NoticeLevel::Success, "Todo added successfully!");
                Ok(todo)
            }
            Err(err) => {
                state.notify(NoticeLevel::Error, format!("Failed to add todo: {err}"));
                Err(err)
            }
        }
    }

    /// Change a todo's title and description.
    ///
    /// # Errors
    ///
    /// `Invalid` for a blank title (no request is made), otherwise the
    /// request error.
    pub async fn edit(
        &self,
        id: TodoId,
        title: &str,
        description: Option<&str>,
    ) -> Result<Todo, ClientError> {
        if title.trim().is_empty() {
            return Err(ClientError::Invalid("Title cannot be empty".to_string()));
        }
        let patch = TodoPatch {
            title: Some(title.to_string()),
            description: description.map(str::to_string),
            completed: None,
        };
        self.apply(id, &patch, "Todo updated successfully!").await
    }

    /// Flip a todo's completion flag.
    ///
    /// # Errors
    ///
    /// `Invalid` if the todo is not on the board, otherwise the request
    /// error.
    pub async fn toggle(&self, id: TodoId) -> Result<Todo, ClientError> {
        let completed = self
            .state()
            .todos
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.completed)
            .ok_or_else(|| ClientError::Invalid("Todo not found".to_string()))?;

        let message = if completed {
            "Todo marked as pending"
        } else {
            "Todo completed!"
        };
        self.apply(id, &TodoPatch::completed(!completed), message)
            .await
    }

    async fn apply(
        &self,
        id: TodoId,
        patch: &TodoPatch,
        success: &str,
    ) -> Result<Todo, ClientError> {
        let _guard = self.begin(Target::Todo(id))?;
        let result = self.api.update_todo(id, patch).await;

        let mut state = self.state();
        match result {
            Ok(todo) => {
                state.replace(todo.clone());
                state.notify(NoticeLevel::Success, success);
                Ok(todo)
            }
            Err(err) => {
                state.notify(NoticeLevel::Error, format!("Failed to update todo: {err}"));
                Err(err)
            }
        }
    }

    /// Delete a todo and drop it from the board.
    ///
    /// # Errors
    ///
    /// Returns the request error; the todo stays on the board.
    pub async fn remove(&self, id: TodoId) -> Result<(), ClientError> {
        let _guard = self.begin(Target::Todo(id))?;
        let result = self.api.delete_todo(id).await;

        let mut state = self.state();
        match result {
            Ok(_) => {
                state.todos.retain(|t| t.id != id);
                state.notify(NoticeLevel::Success, "Todo deleted successfully!");
                Ok(())
            }
            Err(err) => {
                state.notify(NoticeLevel::Error, format!("Failed to delete todo: {err}"));
                Err(err)
            }
        }
    }

    /// Ask the server to compose and deliver a summary.
    ///
    /// On success the server's confirmation, which names the delivery
    /// channel, becomes the notice.
    ///
    /// # Errors
    ///
    /// `Invalid` when the board is empty (no request is made), otherwise the
    /// request error. The list is never changed.
    pub async fn summarize(&self) -> Result<String, ClientError> {
        if self.state().todos.is_empty() {
            return Err(ClientError::Invalid(
                "Add a todo before generating a summary".to_string(),
            ));
        }
        let _guard = self.begin(Target::Summary)?;
        let result = self.api.summarize().await;

        let mut state = self.state();
        match result {
            Ok(response) => {
                state.summary = Some(response.summary.clone());
                state.notify(NoticeLevel::Success, response.message);
                Ok(response.summary)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Summary request failed");
                state.notify(NoticeLevel::Error, "Failed to generate summary.");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> TodoBoard {
        // Nothing listens on port 1; these tests never reach the network.
        TodoBoard::new(ApiClient::new("http://127.0.0.1:1/api"))
    }

    #[tokio::test]
    async fn test_blank_title_is_rejected_locally() {
        let board = board();
        assert!(matches!(board.add("  ", None).await, Err(ClientError::Invalid(_))));
        assert!(board.take_notices().is_empty());
    }

    #[tokio::test]
    async fn test_summarize_disabled_for_empty_board() {
        let board = board();
        assert!(!board.can_summarize());
        assert!(matches!(board.summarize().await, Err(ClientError::Invalid(_))));
    }

    #[test]
    fn test_busy_target_rejects_second_request() {
        let board = board();
        let guard = board.begin(Target::Summary);
        assert!(guard.is_ok());
        assert!(board.is_busy(Target::Summary));
        assert!(matches!(board.begin(Target::Summary), Err(ClientError::Busy)));
        assert!(!board.is_busy(Target::Form));

        drop(guard);
        assert!(!board.is_busy(Target::Summary));
    }
}
