//! HTTP surface for the to-do task service.
//!
//! The controller layer is deliberately thin: handlers translate between
//! the wire DTO and the domain entity, parse the status path parameter,
//! and delegate everything else to [`TodoTaskService`]. An unparsable
//! status never reaches the service layer.

mod dto;
mod error;
mod handlers;

pub use dto::TaskDto;
pub use error::ApiError;

use crate::todo::{ports::TaskRepository, services::TodoTaskService};
use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;

/// Builds the task API router over the given service.
///
/// The list route is registered both with a literal-space segment and
/// with its percent-encoded spelling, since clients send either form
/// and routing happens on the raw request path.
#[must_use]
pub fn router<R>(service: Arc<TodoTaskService<R>>) -> Router
where
    R: TaskRepository + 'static,
{
    Router::new()
        .route("/api/todotask", post(handlers::insert_task::<R>))
        .route(
            "/api/todotask/Get All Tasks",
            get(handlers::get_all_tasks::<R>),
        )
        .route(
            "/api/todotask/Get%20All%20Tasks",
            get(handlers::get_all_tasks::<R>),
        )
        .route(
            "/api/todotask/status/{status}",
            get(handlers::get_tasks_by_status::<R>),
        )
        .route(
            "/api/todotask/deleteByStatus/{status}",
            delete(handlers::delete_tasks_by_status::<R>),
        )
        .route(
            "/api/todotask/{id}",
            get(handlers::get_task_by_id::<R>)
                .put(handlers::update_task::<R>)
                .delete(handlers::delete_task::<R>),
        )
        .with_state(service)
}
