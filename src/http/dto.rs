//! Wire DTO and query-parameter shapes for the task API.

use crate::todo::domain::{DEFAULT_PAGE_LIMIT, Page, TodoTask, UNASSIGNED_ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

/// External JSON representation of a to-do task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    /// Store-assigned identifier; read-only, absent on creation payloads.
    #[serde(default)]
    pub id: Option<i32>,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Due date, defaulting to the Unix epoch when the payload omits it.
    #[serde(default = "epoch")]
    pub due_date: DateTime<Utc>,
    /// Free-text status, validated by the service on writes.
    #[serde(default)]
    pub status: Option<String>,
}

impl From<TodoTask> for TaskDto {
    fn from(entity: TodoTask) -> Self {
        Self {
            id: Some(entity.id),
            description: entity.description,
            due_date: entity.due_date,
            status: entity.status,
        }
    }
}

impl From<TaskDto> for TodoTask {
    fn from(dto: TaskDto) -> Self {
        Self {
            id: dto.id.unwrap_or(UNASSIGNED_ID),
            description: dto.description,
            due_date: dto.due_date,
            status: dto.status,
        }
    }
}

/// Pagination query parameters shared by the list and filter routes.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    /// Number of rows to skip, default 0.
    #[serde(default)]
    pub offset: Option<u32>,
    /// Maximum number of rows to return, default 100.
    #[serde(default)]
    pub limit: Option<u32>,
}

impl From<PageQuery> for Page {
    fn from(query: PageQuery) -> Self {
        Self::new(
            query.offset.unwrap_or(0),
            query.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
        )
    }
}

/// Query parameters for the status filter and bulk delete routes.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDatesQuery {
    /// Inclusive lower due-date bound, open when absent.
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    /// Inclusive upper due-date bound, open when absent.
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    /// Number of rows to skip, default 0.
    #[serde(default)]
    pub offset: Option<u32>,
    /// Maximum number of rows affected, default 100.
    #[serde(default)]
    pub limit: Option<u32>,
}

impl StatusDatesQuery {
    /// Splits the query into its pagination component.
    #[must_use]
    pub fn page(&self) -> Page {
        Page::new(
            self.offset.unwrap_or(0),
            self.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
        )
    }
}
