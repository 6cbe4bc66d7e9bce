//! Diesel row models for to-do task persistence.

use super::schema::to_do_tasks;
use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = to_do_tasks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    /// Store-assigned task identifier.
    pub id: i32,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Due date stored as a naive UTC timestamp.
    pub due_date: NaiveDateTime,
    /// Canonical status label.
    pub status: String,
}

/// Insert model for task records; the store assigns the identifier.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = to_do_tasks)]
pub struct NewTaskRow {
    /// Optional free-text description.
    pub description: Option<String>,
    /// Due date stored as a naive UTC timestamp.
    pub due_date: NaiveDateTime,
    /// Canonical status label.
    pub status: String,
}

/// Changeset overwriting every mutable column of an existing row.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = to_do_tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Optional free-text description.
    pub description: Option<String>,
    /// Due date stored as a naive UTC timestamp.
    pub due_date: NaiveDateTime,
    /// Canonical status label.
    pub status: String,
}
