//! In-memory repository for to-do tasks.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::{Page, StatusFilter, StoredTask},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Records are held in insertion order, which is the stable order the
/// listing and filter operations expose.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug)]
struct InMemoryTaskState {
    tasks: Vec<StoredTask>,
    next_id: i32,
}

impl Default for InMemoryTaskState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned<T>(err: std::sync::PoisonError<T>) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Applies offset/limit slicing to an iterator of records.
fn paginate<'a>(
    records: impl Iterator<Item = &'a StoredTask>,
    page: Page,
) -> impl Iterator<Item = &'a StoredTask> {
    records.skip(page.offset as usize).take(page.limit as usize)
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_by_id(&self, id: i32) -> TaskRepositoryResult<Option<StoredTask>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state.tasks.iter().find(|task| task.id == id).cloned())
    }

    async fn list(&self, page: Page) -> TaskRepositoryResult<Vec<StoredTask>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(paginate(state.tasks.iter(), page).cloned().collect())
    }

    async fn find_by_due_date(&self, due: DateTime<Utc>) -> TaskRepositoryResult<Vec<StoredTask>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        Ok(state
            .tasks
            .iter()
            .filter(|task| task.due_date == due)
            .cloned()
            .collect())
    }

    async fn find_by_status_and_dates(
        &self,
        filter: StatusFilter,
        page: Page,
    ) -> TaskRepositoryResult<Vec<StoredTask>> {
        let state = self.state.read().map_err(lock_poisoned)?;
        let matching = state.tasks.iter().filter(|task| filter.matches(task));
        Ok(paginate(matching, page).cloned().collect())
    }

    async fn insert(&self, record: StoredTask) -> TaskRepositoryResult<StoredTask> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let stored = StoredTask {
            id: state.next_id,
            ..record
        };
        state.next_id += 1;
        state.tasks.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, record: StoredTask) -> TaskRepositoryResult<Option<StoredTask>> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let Some(slot) = state.tasks.iter_mut().find(|task| task.id == record.id) else {
            return Ok(None);
        };
        *slot = record.clone();
        Ok(Some(record))
    }

    async fn delete_by_id(&self, id: i32) -> TaskRepositoryResult<bool> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let before = state.tasks.len();
        state.tasks.retain(|task| task.id != id);
        Ok(state.tasks.len() < before)
    }

    async fn delete_by_status_and_dates(
        &self,
        filter: StatusFilter,
        page: Page,
    ) -> TaskRepositoryResult<usize> {
        let mut state = self.state.write().map_err(lock_poisoned)?;
        let matching = state.tasks.iter().filter(|task| filter.matches(task));
        let doomed: Vec<i32> = paginate(matching, page).map(|task| task.id).collect();
        state.tasks.retain(|task| !doomed.contains(&task.id));
        Ok(doomed.len())
    }
}
