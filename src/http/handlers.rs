//! Route handlers for the task API.

#![expect(
    clippy::needless_pass_by_value,
    reason = "axum handlers receive extractors by value"
)]

use super::dto::{PageQuery, StatusDatesQuery, TaskDto};
use super::error::ApiError;
use crate::todo::{
    domain::{StatusFilter, TaskStatus, TodoTask},
    ports::TaskRepository,
    services::TodoTaskService,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use std::sync::Arc;

/// Parses the status path parameter, rejecting unknown text before the
/// request reaches the service layer.
fn parse_status_param(raw: &str) -> Result<TaskStatus, ApiError> {
    TaskStatus::try_from(raw).map_err(|_| ApiError::InvalidStatusParam(raw.to_owned()))
}

/// GET `/api/todotask/Get All Tasks`
pub async fn get_all_tasks<R>(
    State(service): State<Arc<TodoTaskService<R>>>,
    Query(page): Query<PageQuery>,
) -> Result<Json<Vec<TaskDto>>, ApiError>
where
    R: TaskRepository,
{
    let tasks = service.get_all(page.into()).await?;
    Ok(Json(tasks.into_iter().map(TaskDto::from).collect()))
}

/// GET `/api/todotask/{id}`
///
/// Answers 200 with a JSON `null` body when no task has the id.
pub async fn get_task_by_id<R>(
    State(service): State<Arc<TodoTaskService<R>>>,
    Path(id): Path<i32>,
) -> Result<Json<Option<TaskDto>>, ApiError>
where
    R: TaskRepository,
{
    let task = service.get_by_id(id).await?;
    Ok(Json(task.map(TaskDto::from)))
}

/// GET `/api/todotask/status/{status}`
pub async fn get_tasks_by_status<R>(
    State(service): State<Arc<TodoTaskService<R>>>,
    Path(status): Path<String>,
    Query(query): Query<StatusDatesQuery>,
) -> Result<Json<Vec<TaskDto>>, ApiError>
where
    R: TaskRepository,
{
    let parsed = parse_status_param(&status)?;
    let filter = StatusFilter::new(parsed, query.start_date, query.end_date);
    let tasks = service
        .get_by_status_and_dates(filter, query.page())
        .await?;
    Ok(Json(tasks.into_iter().map(TaskDto::from).collect()))
}

/// POST `/api/todotask`
pub async fn insert_task<R>(
    State(service): State<Arc<TodoTaskService<R>>>,
    Json(payload): Json<TaskDto>,
) -> Result<Json<TaskDto>, ApiError>
where
    R: TaskRepository,
{
    let created = service.insert(TodoTask::from(payload)).await?;
    Ok(Json(created.into()))
}

/// PUT `/api/todotask/{id}`
///
/// The path id wins over any id carried in the payload. Answers 200 with
/// a JSON `null` body when no task has the id.
pub async fn update_task<R>(
    State(service): State<Arc<TodoTaskService<R>>>,
    Path(id): Path<i32>,
    Json(payload): Json<TaskDto>,
) -> Result<Json<Option<TaskDto>>, ApiError>
where
    R: TaskRepository,
{
    let entity = TodoTask {
        id,
        ..TodoTask::from(payload)
    };
    let updated = service.update(entity).await?;
    Ok(Json(updated.map(TaskDto::from)))
}

/// DELETE `/api/todotask/{id}`
pub async fn delete_task<R>(
    State(service): State<Arc<TodoTaskService<R>>>,
    Path(id): Path<i32>,
) -> Result<Json<bool>, ApiError>
where
    R: TaskRepository,
{
    let removed = service.delete(id).await?;
    Ok(Json(removed))
}

/// DELETE `/api/todotask/deleteByStatus/{status}`
pub async fn delete_tasks_by_status<R>(
    State(service): State<Arc<TodoTaskService<R>>>,
    Path(status): Path<String>,
    Query(query): Query<StatusDatesQuery>,
) -> Result<Json<usize>, ApiError>
where
    R: TaskRepository,
{
    let parsed = parse_status_param(&status)?;
    let filter = StatusFilter::new(parsed, query.start_date, query.end_date);
    let removed = service
        .delete_by_status_and_dates(filter, query.page())
        .await?;
    Ok(Json(removed))
}
