//! Todo service: request validation and field defaulting over a [`TodoStore`].

use crate::store::{StoreError, TodoStore};
use crate::todo::{NewTodo, Todo, TodoId, TodoPatch};
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by [`TodoService`].
///
/// Store errors are never swallowed: they arrive here and are translated to
/// a status code only at the HTTP boundary.
#[derive(Error, Debug)]
pub enum TodoError {
    /// Bad client input, such as an empty title.
    #[error("{0}")]
    Validation(String),

    /// No todo with this id exists.
    #[error("Todo not found: {0}")]
    NotFound(TodoId),

    /// The record store could not be reached.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Any other record store failure.
    #[error("Store error: {0}")]
    Store(String),
}

impl From<StoreError> for TodoError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::NotFound(id),
            StoreError::Unavailable(msg) => Self::StoreUnavailable(msg),
            StoreError::Database(msg) => Self::Store(msg),
        }
    }
}

/// Message returned when a create request has no usable title.
pub const TITLE_REQUIRED: &str = "Title is required";

/// Orchestrates record store calls for the HTTP layer.
#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl std::fmt::Debug for TodoService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoService").finish_non_exhaustive()
    }
}

impl TodoService {
    /// Create a service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// All todos, newest first, exactly as the store returns them.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn get_all_todos(&self) -> Result<Vec<Todo>, TodoError> {
        let todos = self.store.list().await?;
        tracing::debug!(count = todos.len(), "Listed todos");
        Ok(todos)
    }

    /// Create a todo from raw client input.
    ///
    /// `title` and `description` are trimmed; `completed` starts `false`.
    ///
    /// # Errors
    ///
    /// - `Validation` if the trimmed title is empty (nothing is stored)
    /// - store failures otherwise
    pub async fn create_todo(
        &self,
        title: &str,
        description: Option<&str>,
    ) -> Result<Todo, TodoError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TodoError::Validation(TITLE_REQUIRED.to_string()));
        }

        let new_todo = NewTodo {
            title: title.to_string(),
            description: description.map(str::trim).unwrap_or_default().to_string(),
            completed: false,
        };

        let todo = self.store.insert(new_todo).await?;
        tracing::info!(todo_id = %todo.id, "Created todo");
        Ok(todo)
    }

    /// Apply a partial update to an existing todo.
    ///
    /// Supplied text fields are trimmed the same way as on creation. A
    /// supplied title must not be blank.
    ///
    /// # Errors
    ///
    /// - `Validation` if a supplied title is blank
    /// - `NotFound` if no todo has this id
    /// - store failures otherwise
    pub async fn update_todo(&self, id: TodoId, patch: TodoPatch) -> Result<Todo, TodoError> {
        let patch = normalize_patch(patch)?;
        let todo = self.store.update(id, patch).await?;
        tracing::info!(todo_id = %id, completed = todo.completed, "Updated todo");
        Ok(todo)
    }

    /// Permanently delete a todo.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no todo has this id
    /// - store failures otherwise
    pub async fn delete_todo(&self, id: TodoId) -> Result<(), TodoError> {
        self.store.delete(id).await?;
        tracing::info!(todo_id = %id, "Deleted todo");
        Ok(())
    }
}

fn normalize_patch(patch: TodoPatch) -> Result<TodoPatch, TodoError> {
    let title = match patch.title {
        Some(title) => {
            let title = title.trim();
            if title.is_empty() {
                return Err(TodoError::Validation("Title cannot be empty".to_string()));
            }
            Some(title.to_string())
        }
        None => None,
    };

    Ok(TodoPatch {
        title,
        description: patch.description.map(|d| d.trim().to_string()),
        completed: patch.completed,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_fields() {
        let patch = normalize_patch(TodoPatch {
            title: Some("  Buy milk ".to_string()),
            description: Some(" two litres  ".to_string()),
            completed: None,
        })
        .unwrap();

        assert_eq!(patch.title.as_deref(), Some("Buy milk"));
        assert_eq!(patch.description.as_deref(), Some("two litres"));
        assert_eq!(patch.completed, None);
    }

    #[test]
    fn test_normalize_rejects_blank_title() {
        let err = normalize_patch(TodoPatch {
            title: Some("   ".to_string()),
            ..TodoPatch::default()
        })
        .unwrap_err();
        assert!(matches!(err, TodoError::Validation(_)));
    }

    #[test]
    fn test_store_not_found_becomes_service_not_found() {
        let id = TodoId::new();
        assert!(matches!(
            TodoError::from(StoreError::NotFound(id)),
            TodoError::NotFound(found) if found == id
        ));
        assert!(matches!(
            TodoError::from(StoreError::Unavailable("down".to_string())),
            TodoError::StoreUnavailable(_)
        ));
    }
}
