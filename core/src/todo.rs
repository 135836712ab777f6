//! The `Todo` entity and the field sets used to create and update it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a todo item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a new random `TodoId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A single todo item as persisted by the record store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, assigned by the store
    pub id: TodoId,
    /// Non-empty, trimmed title
    pub title: String,
    /// Trimmed description, empty when not supplied
    #[serde(default)]
    pub description: String,
    /// Whether the todo is completed
    pub completed: bool,
    /// When the todo was created, assigned by the store
    pub created_at: DateTime<Utc>,
}

/// Validated fields for a todo that does not exist yet.
///
/// Only [`crate::TodoService`] builds these, so a store never sees an
/// untrimmed or empty title.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTodo {
    /// Trimmed, non-empty title
    pub title: String,
    /// Trimmed description
    pub description: String,
    /// Always `false` for new todos
    pub completed: bool,
}

/// Partial update naming exactly the mutable fields.
///
/// Absent fields are left untouched. Unknown fields are rejected at
/// deserialization time instead of being merged into the record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TodoPatch {
    /// New title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New completion state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Patch that only changes the completion flag.
    #[must_use]
    pub const fn completed(completed: bool) -> Self {
        Self {
            title: None,
            description: None,
            completed: Some(completed),
        }
    }

    /// Apply this patch to a todo in place.
    pub fn apply_to(&self, todo: &mut Todo) {
        if let Some(title) = &self.title {
            todo.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            todo.description.clone_from(description);
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use super::*;

    fn sample() -> Todo {
        Todo {
            id: TodoId::new(),
            title: "Write report".to_string(),
            description: "Q3 numbers".to_string(),
            completed: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_todo_id_round_trips_through_display() {
        let id = TodoId::new();
        let parsed: TodoId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_todo_id_rejects_garbage() {
        assert!("1700000000000".parse::<TodoId>().is_err());
    }

    #[test]
    fn test_todo_serializes_flat_id() {
        let todo = sample();
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], todo.id.to_string());
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn test_patch_rejects_unknown_fields() {
        let result: Result<TodoPatch, _> = serde_json::from_str(r#"{"priority": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_apply_changes_only_supplied_fields() {
        let mut todo = sample();
        let before = todo.clone();

        TodoPatch::completed(true).apply_to(&mut todo);

        assert!(todo.completed);
        assert_eq!(todo.title, before.title);
        assert_eq!(todo.description, before.description);
        assert_eq!(todo.created_at, before.created_at);
        assert_eq!(todo.id, before.id);
    }

    #[test]
    fn test_empty_patch() {
        let patch: TodoPatch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch, TodoPatch::default());
        assert_ne!(TodoPatch::completed(false), TodoPatch::default());
    }
}
