//! Task entity, persistence record, and the mapping between them.

use super::{InvalidStatusError, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder identifier carried by entities that have not been stored.
pub(crate) const UNASSIGNED_ID: i32 = 0;

/// To-do task entity.
///
/// Status is free text here: the wire format legitimately carries
/// arbitrary strings, and the service validates them before any write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoTask {
    /// Store-assigned identifier, `0` before insert.
    pub id: i32,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Due date in UTC, Unix epoch when unset.
    pub due_date: DateTime<Utc>,
    /// Status text, validated against [`TaskStatus`] at write time.
    pub status: Option<String>,
}

impl TodoTask {
    /// Creates an unstored entity with the placeholder identifier.
    #[must_use]
    pub const fn new(
        description: Option<String>,
        due_date: DateTime<Utc>,
        status: Option<String>,
    ) -> Self {
        Self {
            id: UNASSIGNED_ID,
            description,
            due_date,
            status,
        }
    }
}

/// Persistence record for a to-do task.
///
/// The stored shape carries the enumerated status, so a record can only
/// exist for statuses inside the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredTask {
    /// Store-assigned identifier, unique and immutable after creation.
    pub id: i32,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Due date in UTC.
    pub due_date: DateTime<Utc>,
    /// Enumerated lifecycle status.
    pub status: TaskStatus,
}

impl TryFrom<&TodoTask> for StoredTask {
    type Error = InvalidStatusError;

    /// Maps an entity to its persistence shape.
    ///
    /// Total and lossless for valid statuses; fails detectably when the
    /// status is unset or outside the enumeration.
    fn try_from(entity: &TodoTask) -> Result<Self, Self::Error> {
        let raw = entity
            .status
            .as_deref()
            .ok_or(InvalidStatusError::Missing)?;
        let status = TaskStatus::try_from(raw)?;
        Ok(Self {
            id: entity.id,
            description: entity.description.clone(),
            due_date: entity.due_date,
            status,
        })
    }
}

impl From<StoredTask> for TodoTask {
    /// Maps a persistence record back to the entity shape, rendering the
    /// status with its canonical label.
    fn from(record: StoredTask) -> Self {
        Self {
            id: record.id,
            description: record.description,
            due_date: record.due_date,
            status: Some(record.status.as_str().to_owned()),
        }
    }
}
