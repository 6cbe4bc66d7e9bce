//! `SQLite` adapters for to-do task persistence.

mod models;
mod repository;
mod schema;

pub use repository::{SqliteTaskRepository, TaskSqlitePool};
