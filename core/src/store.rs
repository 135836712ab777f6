//! Record store adapter trait.
//!
//! A `TodoStore` translates CRUD calls into queries against the external
//! record store. It does no validation and no caching: every call round-trips
//! to the backing store, and concurrent writes to the same id are resolved by
//! the store itself (last write wins).
//!
//! # Implementations
//!
//! - `PostgresTodoStore` (in `todo-summary-postgres`): production store
//! - `InMemoryTodoStore` (in `todo-summary-testing`): tests and local development

use crate::todo::{NewTodo, Todo, TodoId, TodoPatch};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Boxed future returned by [`TodoStore`] methods.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + Send + 'a>>;

/// Errors that can occur during record store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record matches the id.
    #[error("Todo not found: {0}")]
    NotFound(TodoId),

    /// The store could not be reached (connection refused, pool exhausted, ...).
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The store was reached but rejected or failed the query.
    #[error("Database error: {0}")]
    Database(String),
}

/// Record store abstraction for todo rows.
///
/// # Dyn Compatibility
///
/// Methods return boxed futures instead of using `async fn` so the trait can
/// be shared as `Arc<dyn TodoStore>` across request handlers.
pub trait TodoStore: Send + Sync {
    /// All todos, newest-created first.
    ///
    /// # Errors
    ///
    /// - `Unavailable`: the store could not be reached
    /// - `Database`: the query failed
    fn list(&self) -> StoreFuture<'_, Vec<Todo>>;

    /// Persist a new todo. The store assigns `id` and `created_at`.
    ///
    /// # Errors
    ///
    /// - `Unavailable`: the store could not be reached
    /// - `Database`: the insert failed
    fn insert(&self, todo: NewTodo) -> StoreFuture<'_, Todo>;

    /// Replace the fields named by `patch` on the record with `id`.
    ///
    /// Returns the full record after the update.
    ///
    /// # Errors
    ///
    /// - `NotFound`: no record matches `id`
    /// - `Unavailable` / `Database`: as above
    fn update(&self, id: TodoId, patch: TodoPatch) -> StoreFuture<'_, Todo>;

    /// Permanently remove the record with `id`.
    ///
    /// # Errors
    ///
    /// - `NotFound`: no record matches `id`
    /// - `Unavailable` / `Database`: as above
    fn delete(&self, id: TodoId) -> StoreFuture<'_, ()>;
}
