//! `TodoStore` over a `PostgreSQL` `todos` table.

use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use todo_summary_core::store::{StoreError, StoreFuture, TodoStore};
use todo_summary_core::todo::{NewTodo, Todo, TodoId, TodoPatch};
use uuid::Uuid;

const COLUMNS: &str = "id, title, description, completed, created_at";

/// `PostgreSQL` todo store.
#[derive(Clone, Debug)]
pub struct PostgresTodoStore {
    /// `PostgreSQL` connection pool.
    pool: PgPool,
}

impl PostgresTodoStore {
    /// Connect to the database at `database_url`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if no connection can be established.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| StoreError::Unavailable(format!("Failed to connect: {e}")))?;
        Ok(Self::from_pool(pool))
    }

    /// Wrap an existing pool.
    #[must_use]
    pub const fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run database migrations.
    ///
    /// # Errors
    ///
    /// Returns error if migrations fail.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Database(format!("Migration failed: {e}")))
    }

    async fn list_todos(&self) -> Result<Vec<Todo>, StoreError> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM todos ORDER BY created_at DESC, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("list todos", e))?;

        rows.iter().map(row_to_todo).collect()
    }

    async fn insert_todo(&self, todo: NewTodo) -> Result<Todo, StoreError> {
        let row = sqlx::query(&format!(
            "INSERT INTO todos (title, description, completed) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        ))
        .bind(&todo.title)
        .bind(&todo.description)
        .bind(todo.completed)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("insert todo", e))?;

        row_to_todo(&row)
    }

    async fn update_todo(&self, id: TodoId, patch: TodoPatch) -> Result<Todo, StoreError> {
        let row = sqlx::query(&format!(
            r"
            UPDATE todos
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                completed = COALESCE($4, completed)
            WHERE id = $1
            RETURNING {COLUMNS}
            "
        ))
        .bind(*id.as_uuid())
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.completed)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update todo", e))?
        .ok_or(StoreError::NotFound(id))?;

        row_to_todo(&row)
    }

    async fn delete_todo(&self, id: TodoId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(*id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete todo", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }
}

impl TodoStore for PostgresTodoStore {
    fn list(&self) -> StoreFuture<'_, Vec<Todo>> {
        Box::pin(self.list_todos())
    }

    fn insert(&self, todo: NewTodo) -> StoreFuture<'_, Todo> {
        Box::pin(self.insert_todo(todo))
    }

    fn update(&self, id: TodoId, patch: TodoPatch) -> StoreFuture<'_, Todo> {
        Box::pin(self.update_todo(id, patch))
    }

    fn delete(&self, id: TodoId) -> StoreFuture<'_, ()> {
        Box::pin(self.delete_todo(id))
    }
}

fn row_to_todo(row: &PgRow) -> Result<Todo, StoreError> {
    let decode = |e: sqlx::Error| StoreError::Database(format!("Failed to decode todo row: {e}"));

    Ok(Todo {
        id: TodoId::from_uuid(row.try_get::<Uuid, _>("id").map_err(decode)?),
        title: row.try_get("title").map_err(decode)?,
        description: row.try_get("description").map_err(decode)?,
        completed: row.try_get("completed").map_err(decode)?,
        created_at: row
            .try_get::<DateTime<Utc>, _>("created_at")
            .map_err(decode)?,
    })
}

/// Classify a sqlx error: connectivity problems become `Unavailable`,
/// everything else is a `Database` error.
fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => {
            tracing::warn!(operation, error = %err, "Todo store unreachable");
            StoreError::Unavailable(format!("Failed to {operation}: {err}"))
        }
        other => StoreError::Database(format!("Failed to {operation}: {other}")),
    }
}
