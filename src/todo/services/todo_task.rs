//! Service layer orchestrating validation, mapping, and data access.

use super::validate_status;
use crate::todo::{
    domain::{InvalidStatusError, Page, StatusFilter, StoredTask, TodoTask},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for to-do task operations.
#[derive(Debug, Error)]
pub enum TodoTaskServiceError {
    /// The payload's status failed the pre-write validation check.
    #[error(transparent)]
    InvalidStatus(#[from] InvalidStatusError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for to-do task service operations.
pub type TodoTaskServiceResult<T> = Result<T, TodoTaskServiceError>;

/// Thin orchestrator over the repository port.
///
/// Reads forward to the port and map records to entities; writes
/// validate the status first, map the entity to its persistence shape,
/// perform the write, and map the result back.
#[derive(Debug, Clone)]
pub struct TodoTaskService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TodoTaskService<R>
where
    R: TaskRepository,
{
    /// Creates a new to-do task service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns all tasks in insertion order, sliced by the page.
    ///
    /// # Errors
    ///
    /// Returns [`TodoTaskServiceError::Repository`] when the store fails.
    pub async fn get_all(&self, page: Page) -> TodoTaskServiceResult<Vec<TodoTask>> {
        let records = self.repository.list(page).await?;
        Ok(records.into_iter().map(TodoTask::from).collect())
    }

    /// Retrieves a task by identifier, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`TodoTaskServiceError::Repository`] when the store fails.
    pub async fn get_by_id(&self, id: i32) -> TodoTaskServiceResult<Option<TodoTask>> {
        let record = self.repository.find_by_id(id).await?;
        Ok(record.map(TodoTask::from))
    }

    /// Returns tasks whose due date matches the given instant exactly.
    ///
    /// # Errors
    ///
    /// Returns [`TodoTaskServiceError::Repository`] when the store fails.
    pub async fn get_by_due_date(
        &self,
        due: DateTime<Utc>,
    ) -> TodoTaskServiceResult<Vec<TodoTask>> {
        let records = self.repository.find_by_due_date(due).await?;
        Ok(records.into_iter().map(TodoTask::from).collect())
    }

    /// Returns tasks matching the status filter, sliced by the page.
    ///
    /// # Errors
    ///
    /// Returns [`TodoTaskServiceError::Repository`] when the store fails.
    pub async fn get_by_status_and_dates(
        &self,
        filter: StatusFilter,
        page: Page,
    ) -> TodoTaskServiceResult<Vec<TodoTask>> {
        let records = self
            .repository
            .find_by_status_and_dates(filter, page)
            .await?;
        Ok(records.into_iter().map(TodoTask::from).collect())
    }

    /// Validates and stores a new task, returning it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`TodoTaskServiceError::InvalidStatus`] before any mutation
    /// when the status is unset or unrecognised, and
    /// [`TodoTaskServiceError::Repository`] when the store fails.
    pub async fn insert(&self, entity: TodoTask) -> TodoTaskServiceResult<TodoTask> {
        validate_status(&entity)?;
        let record = StoredTask::try_from(&entity)?;
        let stored = self.repository.insert(record).await?;
        Ok(stored.into())
    }

    /// Validates and overwrites the task keyed by `entity.id`.
    ///
    /// Returns `None` when no task with that id exists; the store is left
    /// unchanged in that case.
    ///
    /// # Errors
    ///
    /// Returns [`TodoTaskServiceError::InvalidStatus`] before any mutation
    /// when the status is unset or unrecognised, and
    /// [`TodoTaskServiceError::Repository`] when the store fails.
    pub async fn update(&self, entity: TodoTask) -> TodoTaskServiceResult<Option<TodoTask>> {
        validate_status(&entity)?;
        let record = StoredTask::try_from(&entity)?;
        let updated = self.repository.update(record).await?;
        Ok(updated.map(TodoTask::from))
    }

    /// Deletes a task by identifier.
    ///
    /// Fetches first and answers `false` without issuing a delete when the
    /// id is absent; the fetch-then-delete pair is the observable contract
    /// of this operation.
    ///
    /// # Errors
    ///
    /// Returns [`TodoTaskServiceError::Repository`] when the store fails.
    pub async fn delete(&self, id: i32) -> TodoTaskServiceResult<bool> {
        let existing = self.repository.find_by_id(id).await?;
        if existing.is_none() {
            return Ok(false);
        }
        Ok(self.repository.delete_by_id(id).await?)
    }

    /// Deletes the paginated subset of tasks matching the filter and
    /// returns the removed count.
    ///
    /// # Errors
    ///
    /// Returns [`TodoTaskServiceError::Repository`] when the store fails.
    pub async fn delete_by_status_and_dates(
        &self,
        filter: StatusFilter,
        page: Page,
    ) -> TodoTaskServiceResult<usize> {
        let removed = self
            .repository
            .delete_by_status_and_dates(filter, page)
            .await?;
        Ok(removed)
    }
}
