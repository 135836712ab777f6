//! `PostgreSQL` record store for the todo summary backend.
//!
//! This crate implements the `TodoStore` trait from `todo-summary-core` on
//! top of a sqlx connection pool. Hosted Postgres services (Supabase, Neon,
//! RDS, ...) work through a plain `DATABASE_URL`.
//!
//! # Example
//!
//! ```ignore
//! use todo_summary_postgres::PostgresTodoStore;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = PostgresTodoStore::connect("postgres://localhost/todos", 10).await?;
//!     store.migrate().await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod todo_store;

pub use todo_store::PostgresTodoStore;
