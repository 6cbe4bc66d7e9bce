//! Filter and pagination value types shared by read and delete paths.

use super::{StoredTask, TaskStatus};
use chrono::{DateTime, Utc};

/// Default page size applied when callers do not supply a limit.
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

/// Offset/limit pagination: skip `offset` rows, then take `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Number of matching rows to skip.
    pub offset: u32,
    /// Maximum number of rows to return after skipping.
    pub limit: u32,
}

impl Page {
    /// Creates a page from explicit offset and limit values.
    #[must_use]
    pub const fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_LIMIT)
    }
}

/// Status filter with an optional inclusive due-date window.
///
/// Absent bounds are open rather than defaulted to epoch/max values, so
/// callers can express one-sided ranges. Both the read and the delete
/// query paths are built from this single predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFilter {
    /// Status every matching task must carry.
    pub status: TaskStatus,
    /// Inclusive lower bound on the due date, open when absent.
    pub start: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the due date, open when absent.
    pub end: Option<DateTime<Utc>>,
}

impl StatusFilter {
    /// Creates a filter over a status and an optional due-date window.
    #[must_use]
    pub const fn new(
        status: TaskStatus,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Self {
        Self { status, start, end }
    }

    /// Returns whether a stored record satisfies the filter.
    #[must_use]
    pub fn matches(&self, record: &StoredTask) -> bool {
        record.status == self.status
            && self.start.is_none_or(|start| record.due_date >= start)
            && self.end.is_none_or(|end| record.due_date <= end)
    }
}
