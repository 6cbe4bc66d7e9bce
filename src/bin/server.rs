//! HTTP server binary for the Tasklist task API.
//!
//! Configuration comes from environment variables:
//!
//! - `TASKLIST_DATABASE_URL` — `SQLite` database path, default
//!   `todo_tasks.db`
//! - `TASKLIST_ADDR` — listen address, default `127.0.0.1:3000`
//!
//! The binary builds the connection pool, bootstraps the schema, and
//! serves the task API until the process is stopped.

use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use std::env;
use std::sync::Arc;
use tasklist::http;
use tasklist::todo::{adapters::sqlite::SqliteTaskRepository, services::TodoTaskService};
use tokio::net::TcpListener;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let database_url =
        env::var("TASKLIST_DATABASE_URL").unwrap_or_else(|_| "todo_tasks.db".to_owned());
    let addr = env::var("TASKLIST_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_owned());

    let pool = Pool::builder().build(ConnectionManager::<SqliteConnection>::new(database_url))?;
    let repository = Arc::new(SqliteTaskRepository::new(pool));
    repository.ensure_schema().await?;

    let service = Arc::new(TodoTaskService::new(repository));
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, http::router(service)).await?;
    Ok(())
}
