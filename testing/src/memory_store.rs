//! In-memory record store.
//!
//! Rows live in a `Vec` kept newest-first, so `list` is a clone. Nothing
//! survives a restart.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use todo_summary_core::environment::{Clock, SystemClock};
use todo_summary_core::store::{StoreError, StoreFuture, TodoStore};
use todo_summary_core::todo::{NewTodo, Todo, TodoId, TodoPatch};

/// `TodoStore` backed by process memory.
///
/// # Example
///
/// ```
/// use todo_summary_core::TodoStore;
/// use todo_summary_core::todo::NewTodo;
/// use todo_summary_testing::InMemoryTodoStore;
///
/// # async fn example() -> Result<(), todo_summary_core::StoreError> {
/// let store = InMemoryTodoStore::new();
/// store.insert(NewTodo {
///     title: "Water plants".to_string(),
///     description: String::new(),
///     completed: false,
/// }).await?;
/// assert_eq!(store.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct InMemoryTodoStore {
    rows: Arc<RwLock<Vec<Todo>>>,
    clock: Arc<dyn Clock>,
    unavailable: Arc<RwLock<bool>>,
}

impl std::fmt::Debug for InMemoryTodoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTodoStore")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl InMemoryTodoStore {
    /// Create an empty store stamped by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty store stamped by `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
            clock,
            unavailable: Arc::new(RwLock::new(false)),
        }
    }

    /// Number of stored todos.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.read().map_or(0, |rows| rows.len())
    }

    /// True when no todos are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Make every subsequent call fail with `StoreError::Unavailable`
    /// (or succeed again with `false`).
    pub fn set_unavailable(&self, unavailable: bool) {
        if let Ok(mut flag) = self.unavailable.write() {
            *flag = unavailable;
        }
    }

    fn check_available(&self) -> Result<(), StoreError> {
        let down = self.unavailable.read().map_or(true, |flag| *flag);
        if down {
            return Err(StoreError::Unavailable("in-memory store is offline".to_string()));
        }
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Todo>>, StoreError> {
        self.check_available()?;
        self.rows
            .read()
            .map_err(|_| StoreError::Unavailable("in-memory store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Todo>>, StoreError> {
        self.check_available()?;
        self.rows
            .write()
            .map_err(|_| StoreError::Unavailable("in-memory store lock poisoned".to_string()))
    }

    fn list_now(&self) -> Result<Vec<Todo>, StoreError> {
        Ok(self.read()?.clone())
    }

    fn insert_now(&self, todo: NewTodo) -> Result<Todo, StoreError> {
        let todo = Todo {
            id: TodoId::new(),
            title: todo.title,
            description: todo.description,
            completed: todo.completed,
            created_at: self.clock.now(),
        };
        self.write()?.insert(0, todo.clone());
        Ok(todo)
    }

    fn update_now(&self, id: TodoId, patch: &TodoPatch) -> Result<Todo, StoreError> {
        let mut rows = self.write()?;
        let todo = rows
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))?;
        patch.apply_to(todo);
        Ok(todo.clone())
    }

    fn delete_now(&self, id: TodoId) -> Result<(), StoreError> {
        let mut rows = self.write()?;
        let before = rows.len();
        rows.retain(|todo| todo.id != id);
        if rows.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}

impl Default for InMemoryTodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore for InMemoryTodoStore {
    fn list(&self) -> StoreFuture<'_, Vec<Todo>> {
        Box::pin(std::future::ready(self.list_now()))
    }

    fn insert(&self, todo: NewTodo) -> StoreFuture<'_, Todo> {
        Box::pin(std::future::ready(self.insert_now(todo)))
    }

    fn update(&self, id: TodoId, patch: TodoPatch) -> StoreFuture<'_, Todo> {
        Box::pin(std::future::ready(self.update_now(id, &patch)))
    }

    fn delete(&self, id: TodoId) -> StoreFuture<'_, ()> {
        Box::pin(std::future::ready(self.delete_now(id)))
    }
}
