//! HTTP request handlers.
//!
//! - [`todos`]: list, create, update and delete todos
//! - [`summary`]: compose and deliver a summary of all todos
//! - [`health`]: liveness and welcome endpoints

pub mod health;
pub mod summary;
pub mod todos;
