//! Repository contract tests exercised against the in-memory adapter.

use crate::todo::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Page, StatusFilter, StoredTask, TaskStatus},
    ports::TaskRepository,
};
use chrono::{DateTime, TimeZone, Utc};
use rstest::{fixture, rstest};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid calendar date")
}

fn record(description: &str, due: DateTime<Utc>, status: TaskStatus) -> StoredTask {
    StoredTask {
        id: 0,
        description: Some(description.to_owned()),
        due_date: due,
        status,
    }
}

#[fixture]
fn repository() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

async fn seed(repository: &InMemoryTaskRepository, records: Vec<StoredTask>) -> Vec<StoredTask> {
    let mut stored = Vec::with_capacity(records.len());
    for incoming in records {
        stored.push(repository.insert(incoming).await.expect("insert succeeds"));
    }
    stored
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_assigns_id_and_round_trips(repository: InMemoryTaskRepository) {
    let inserted = repository
        .insert(record("Task 1", date(2024, 3, 1), TaskStatus::NotStarted))
        .await
        .expect("insert succeeds");

    assert_ne!(inserted.id, 0);
    let fetched = repository
        .find_by_id(inserted.id)
        .await
        .expect("lookup succeeds");
    assert_eq!(fetched, Some(inserted));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_id_misses_without_error(repository: InMemoryTaskRepository) {
    let fetched = repository.find_by_id(42).await.expect("lookup succeeds");
    assert_eq!(fetched, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_preserves_insertion_order_and_paginates(repository: InMemoryTaskRepository) {
    let stored = seed(
        &repository,
        (1..=5)
            .map(|n| record(&format!("Task {n}"), date(2024, 3, n), TaskStatus::NotStarted))
            .collect(),
    )
    .await;

    let all = repository
        .list(Page::default())
        .await
        .expect("list succeeds");
    assert_eq!(all, stored);

    let sliced = repository
        .list(Page::new(1, 2))
        .await
        .expect("list succeeds");
    assert_eq!(
        sliced.iter().map(|task| task.id).collect::<Vec<_>>(),
        vec![stored[1].id, stored[2].id]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_due_date_matches_exact_instant_only(repository: InMemoryTaskRepository) {
    seed(
        &repository,
        vec![
            record("on the day", date(2024, 3, 10), TaskStatus::NotStarted),
            record("day after", date(2024, 3, 11), TaskStatus::NotStarted),
        ],
    )
    .await;

    let found = repository
        .find_by_due_date(date(2024, 3, 10))
        .await
        .expect("query succeeds");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].description.as_deref(), Some("on the day"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_filter_without_bounds_returns_whole_status_set(
    repository: InMemoryTaskRepository,
) {
    let stored = seed(
        &repository,
        vec![
            record("a", date(2024, 1, 1), TaskStatus::InProgress),
            record("b", date(2024, 2, 1), TaskStatus::Completed),
            record("c", date(2024, 3, 1), TaskStatus::InProgress),
        ],
    )
    .await;

    let found = repository
        .find_by_status_and_dates(
            StatusFilter::new(TaskStatus::InProgress, None, None),
            Page::default(),
        )
        .await
        .expect("query succeeds");

    assert_eq!(
        found.iter().map(|task| task.id).collect::<Vec<_>>(),
        vec![stored[0].id, stored[2].id]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_filter_window_excludes_straddling_due_dates(repository: InMemoryTaskRepository) {
    // Two InProgress tasks due before and after the window; both fall out.
    seed(
        &repository,
        vec![
            record("early", date(2024, 5, 1), TaskStatus::InProgress),
            record("late", date(2024, 8, 1), TaskStatus::InProgress),
        ],
    )
    .await;

    let found = repository
        .find_by_status_and_dates(
            StatusFilter::new(
                TaskStatus::InProgress,
                Some(date(2024, 6, 1)),
                Some(date(2024, 6, 30)),
            ),
            Page::default(),
        )
        .await
        .expect("query succeeds");

    assert!(found.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_filter_one_sided_bounds_are_open(repository: InMemoryTaskRepository) {
    let stored = seed(
        &repository,
        vec![
            record("early", date(2024, 1, 1), TaskStatus::Completed),
            record("middle", date(2024, 6, 15), TaskStatus::Completed),
            record("late", date(2024, 12, 1), TaskStatus::Completed),
        ],
    )
    .await;

    let from_june = repository
        .find_by_status_and_dates(
            StatusFilter::new(TaskStatus::Completed, Some(date(2024, 6, 1)), None),
            Page::default(),
        )
        .await
        .expect("query succeeds");
    assert_eq!(
        from_june.iter().map(|task| task.id).collect::<Vec<_>>(),
        vec![stored[1].id, stored[2].id]
    );

    let until_june = repository
        .find_by_status_and_dates(
            StatusFilter::new(TaskStatus::Completed, None, Some(date(2024, 6, 30))),
            Page::default(),
        )
        .await
        .expect("query succeeds");
    assert_eq!(
        until_june.iter().map(|task| task.id).collect::<Vec<_>>(),
        vec![stored[0].id, stored[1].id]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_overwrites_all_fields_and_keeps_id(repository: InMemoryTaskRepository) {
    let inserted = repository
        .insert(record("Task 1", date(2024, 3, 1), TaskStatus::NotStarted))
        .await
        .expect("insert succeeds");

    let updated = repository
        .update(StoredTask {
            id: inserted.id,
            description: Some("Updated task 1".to_owned()),
            due_date: date(2024, 4, 1),
            status: TaskStatus::InProgress,
        })
        .await
        .expect("update succeeds")
        .expect("task exists");

    assert_eq!(updated.id, inserted.id);
    assert_eq!(updated.description.as_deref(), Some("Updated task 1"));
    assert_eq!(updated.due_date, date(2024, 4, 1));
    assert_eq!(updated.status, TaskStatus::InProgress);

    let fetched = repository
        .find_by_id(inserted.id)
        .await
        .expect("lookup succeeds");
    assert_eq!(fetched, Some(updated));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_on_absent_id_is_a_no_op(repository: InMemoryTaskRepository) {
    let inserted = repository
        .insert(record("Task 1", date(2024, 3, 1), TaskStatus::NotStarted))
        .await
        .expect("insert succeeds");

    let missing = repository
        .update(record("ghost", date(2024, 4, 1), TaskStatus::Completed))
        .await
        .expect("update succeeds");
    assert_eq!(missing, None);

    let all = repository
        .list(Page::default())
        .await
        .expect("list succeeds");
    assert_eq!(all, vec![inserted]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_by_id_is_true_exactly_once(repository: InMemoryTaskRepository) {
    let inserted = repository
        .insert(record("Task 1", date(2024, 3, 1), TaskStatus::NotStarted))
        .await
        .expect("insert succeeds");

    assert!(repository
        .delete_by_id(inserted.id)
        .await
        .expect("delete succeeds"));
    assert!(!repository
        .delete_by_id(inserted.id)
        .await
        .expect("delete succeeds"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn bulk_delete_removes_paginated_matches_and_reports_count(
    repository: InMemoryTaskRepository,
) {
    let stored = seed(
        &repository,
        vec![
            record("a", date(2024, 1, 1), TaskStatus::NotStarted),
            record("b", date(2024, 2, 1), TaskStatus::NotStarted),
            record("c", date(2024, 3, 1), TaskStatus::InProgress),
            record("d", date(2024, 4, 1), TaskStatus::NotStarted),
        ],
    )
    .await;

    let filter = StatusFilter::new(TaskStatus::NotStarted, None, None);
    let removed = repository
        .delete_by_status_and_dates(filter, Page::new(0, 2))
        .await
        .expect("delete succeeds");
    assert_eq!(removed, 2);

    // The page bounded the destructive batch: one NotStarted task remains.
    let remaining = repository
        .find_by_status_and_dates(filter, Page::default())
        .await
        .expect("query succeeds");
    assert_eq!(
        remaining.iter().map(|task| task.id).collect::<Vec<_>>(),
        vec![stored[3].id]
    );

    let untouched = repository
        .find_by_id(stored[2].id)
        .await
        .expect("lookup succeeds");
    assert!(untouched.is_some());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn bulk_delete_with_window_uses_the_read_filter_semantics(
    repository: InMemoryTaskRepository,
) {
    seed(
        &repository,
        vec![
            record("inside", date(2024, 6, 15), TaskStatus::Completed),
            record("outside", date(2024, 9, 1), TaskStatus::Completed),
        ],
    )
    .await;

    let filter = StatusFilter::new(
        TaskStatus::Completed,
        Some(date(2024, 6, 1)),
        Some(date(2024, 6, 30)),
    );
    let removed = repository
        .delete_by_status_and_dates(filter, Page::default())
        .await
        .expect("delete succeeds");
    assert_eq!(removed, 1);

    let after = repository
        .find_by_status_and_dates(filter, Page::default())
        .await
        .expect("query succeeds");
    assert!(after.is_empty());
}
