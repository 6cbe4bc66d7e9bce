//! Repository port for to-do task persistence and filtered queries.

use crate::todo::domain::{Page, StatusFilter, StoredTask};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// "Not found" is a value on this contract, never an error: lookups
/// return `None`, updates on absent ids return `None`, and deletes on
/// absent ids return `false`. Only store-level failures surface as
/// [`TaskRepositoryError`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: i32) -> TaskRepositoryResult<Option<StoredTask>>;

    /// Returns all tasks in stable insertion order, sliced by the page.
    async fn list(&self, page: Page) -> TaskRepositoryResult<Vec<StoredTask>>;

    /// Returns tasks whose due date matches the given instant exactly.
    async fn find_by_due_date(&self, due: DateTime<Utc>) -> TaskRepositoryResult<Vec<StoredTask>>;

    /// Returns tasks matching the status filter, in insertion order,
    /// sliced by the page.
    async fn find_by_status_and_dates(
        &self,
        filter: StatusFilter,
        page: Page,
    ) -> TaskRepositoryResult<Vec<StoredTask>>;

    /// Stores a new task, assigning its identifier.
    ///
    /// The incoming record's id is ignored; the returned record carries
    /// the store-assigned one.
    async fn insert(&self, record: StoredTask) -> TaskRepositoryResult<StoredTask>;

    /// Overwrites all mutable fields of the row keyed by `record.id`.
    ///
    /// Returns `None` without mutating anything when the id is absent.
    async fn update(&self, record: StoredTask) -> TaskRepositoryResult<Option<StoredTask>>;

    /// Removes the task with the given identifier.
    ///
    /// Returns `true` exactly when a matching row existed and was removed.
    async fn delete_by_id(&self, id: i32) -> TaskRepositoryResult<bool>;

    /// Removes the paginated subset of tasks matching the filter.
    ///
    /// The page bounds a single destructive batch; callers needing
    /// full-set deletion repeat the call. Returns the removed row count.
    async fn delete_by_status_and_dates(
        &self,
        filter: StatusFilter,
        page: Page,
    ) -> TaskRepositoryResult<usize>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
