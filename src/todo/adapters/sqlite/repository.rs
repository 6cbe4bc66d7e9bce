//! `SQLite` repository implementation for to-do task storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::to_do_tasks,
};
use crate::todo::{
    domain::{Page, StatusFilter, StoredTask, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::{Sqlite, SqliteConnection};

/// `SQLite` connection pool type used by task adapters.
pub type TaskSqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// `SQLite`-backed task repository.
#[derive(Debug, Clone)]
pub struct SqliteTaskRepository {
    pool: TaskSqlitePool,
}

impl SqliteTaskRepository {
    /// Creates a new repository from a `SQLite` connection pool.
    #[must_use]
    pub const fn new(pool: TaskSqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the `to_do_tasks` table when it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the DDL statement
    /// fails.
    pub async fn ensure_schema(&self) -> TaskRepositoryResult<()> {
        self.run_blocking(|connection| {
            diesel::sql_query(concat!(
                "CREATE TABLE IF NOT EXISTS to_do_tasks (",
                "id INTEGER PRIMARY KEY AUTOINCREMENT, ",
                "description TEXT, ",
                "due_date TIMESTAMP NOT NULL, ",
                "status TEXT NOT NULL)",
            ))
            .execute(connection)
            .map_err(TaskRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn find_by_id(&self, id: i32) -> TaskRepositoryResult<Option<StoredTask>> {
        self.run_blocking(move |connection| {
            let row = to_do_tasks::table
                .find(id)
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_record).transpose()
        })
        .await
    }

    async fn list(&self, page: Page) -> TaskRepositoryResult<Vec<StoredTask>> {
        self.run_blocking(move |connection| {
            let rows = to_do_tasks::table
                .order(to_do_tasks::id.asc())
                .offset(i64::from(page.offset))
                .limit(i64::from(page.limit))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_record).collect()
        })
        .await
    }

    async fn find_by_due_date(&self, due: DateTime<Utc>) -> TaskRepositoryResult<Vec<StoredTask>> {
        self.run_blocking(move |connection| {
            let rows = to_do_tasks::table
                .filter(to_do_tasks::due_date.eq(due.naive_utc()))
                .order(to_do_tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_record).collect()
        })
        .await
    }

    async fn find_by_status_and_dates(
        &self,
        filter: StatusFilter,
        page: Page,
    ) -> TaskRepositoryResult<Vec<StoredTask>> {
        self.run_blocking(move |connection| {
            let rows = filter_query(filter)
                .offset(i64::from(page.offset))
                .limit(i64::from(page.limit))
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_record).collect()
        })
        .await
    }

    async fn insert(&self, record: StoredTask) -> TaskRepositoryResult<StoredTask> {
        let new_row = to_new_row(&record);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(to_do_tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            row_to_record(row)
        })
        .await
    }

    async fn update(&self, record: StoredTask) -> TaskRepositoryResult<Option<StoredTask>> {
        let changes = to_changeset(&record);
        let id = record.id;
        self.run_blocking(move |connection| {
            let row = diesel::update(to_do_tasks::table.find(id))
                .set(&changes)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_record).transpose()
        })
        .await
    }

    async fn delete_by_id(&self, id: i32) -> TaskRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let removed = diesel::delete(to_do_tasks::table.find(id))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(removed > 0)
        })
        .await
    }

    async fn delete_by_status_and_dates(
        &self,
        filter: StatusFilter,
        page: Page,
    ) -> TaskRepositoryResult<usize> {
        self.run_blocking(move |connection| {
            // SQLite cannot bound a DELETE directly, so the paginated batch
            // is materialised first and removed by id.
            let doomed: Vec<i32> = filter_query(filter)
                .offset(i64::from(page.offset))
                .limit(i64::from(page.limit))
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?
                .into_iter()
                .map(|row| row.id)
                .collect();
            diesel::delete(to_do_tasks::table.filter(to_do_tasks::id.eq_any(doomed)))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }
}

/// Builds the shared status/date-window query used by both the read and
/// the delete paths, ordered by insertion (id) order.
fn filter_query(filter: StatusFilter) -> to_do_tasks::BoxedQuery<'static, Sqlite> {
    let mut query = to_do_tasks::table
        .filter(to_do_tasks::status.eq(filter.status.as_str()))
        .into_boxed();
    if let Some(start) = filter.start {
        query = query.filter(to_do_tasks::due_date.ge(start.naive_utc()));
    }
    if let Some(end) = filter.end {
        query = query.filter(to_do_tasks::due_date.le(end.naive_utc()));
    }
    query.order(to_do_tasks::id.asc())
}

fn to_new_row(record: &StoredTask) -> NewTaskRow {
    NewTaskRow {
        description: record.description.clone(),
        due_date: record.due_date.naive_utc(),
        status: record.status.as_str().to_owned(),
    }
}

fn to_changeset(record: &StoredTask) -> TaskChangeset {
    TaskChangeset {
        description: record.description.clone(),
        due_date: record.due_date.naive_utc(),
        status: record.status.as_str().to_owned(),
    }
}

fn row_to_record(row: TaskRow) -> TaskRepositoryResult<StoredTask> {
    let status =
        TaskStatus::try_from(row.status.as_str()).map_err(TaskRepositoryError::persistence)?;
    Ok(StoredTask {
        id: row.id,
        description: row.description,
        due_date: row.due_date.and_utc(),
        status,
    })
}
