//! Domain-focused tests for status parsing, mapping, and filtering.

use crate::todo::domain::{
    InvalidStatusError, ParseStatusError, StatusFilter, StoredTask, TaskStatus, TodoTask,
};
use chrono::{DateTime, TimeZone, Utc};
use rstest::rstest;

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid calendar date")
}

fn stored(id: i32, due: DateTime<Utc>, status: TaskStatus) -> StoredTask {
    StoredTask {
        id,
        description: None,
        due_date: due,
        status,
    }
}

#[rstest]
#[case("NotStarted", TaskStatus::NotStarted)]
#[case("not_started", TaskStatus::NotStarted)]
#[case("NOT-STARTED", TaskStatus::NotStarted)]
#[case("inprogress", TaskStatus::InProgress)]
#[case("  Completed  ", TaskStatus::Completed)]
fn status_parsing_accepts_known_labels(#[case] raw: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::try_from(raw), Ok(expected));
}

#[rstest]
#[case("Cancelled")]
#[case("")]
#[case("NotStartedYet")]
fn status_parsing_rejects_unknown_labels(#[case] raw: &str) {
    assert_eq!(
        TaskStatus::try_from(raw),
        Err(ParseStatusError(raw.to_owned()))
    );
}

#[rstest]
fn status_canonical_labels_round_trip() {
    for status in [
        TaskStatus::NotStarted,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ] {
        assert_eq!(TaskStatus::try_from(status.as_str()), Ok(status));
    }
}

#[rstest]
fn entity_to_record_mapping_is_lossless_for_valid_status() {
    let entity = TodoTask {
        id: 7,
        description: Some("Write report".to_owned()),
        due_date: date(2024, 6, 1),
        status: Some("InProgress".to_owned()),
    };

    let record = StoredTask::try_from(&entity).expect("valid status maps");
    assert_eq!(record.id, 7);
    assert_eq!(record.description.as_deref(), Some("Write report"));
    assert_eq!(record.due_date, date(2024, 6, 1));
    assert_eq!(record.status, TaskStatus::InProgress);

    let back = TodoTask::from(record);
    assert_eq!(back, entity);
}

#[rstest]
fn entity_to_record_mapping_rejects_missing_status() {
    let entity = TodoTask::new(None, date(2024, 6, 1), None);
    assert_eq!(
        StoredTask::try_from(&entity),
        Err(InvalidStatusError::Missing)
    );
}

#[rstest]
fn entity_to_record_mapping_rejects_unknown_status() {
    let entity = TodoTask::new(None, date(2024, 6, 1), Some("Parked".to_owned()));
    assert_eq!(
        StoredTask::try_from(&entity),
        Err(InvalidStatusError::Unrecognised(ParseStatusError(
            "Parked".to_owned()
        )))
    );
}

#[rstest]
fn filter_without_bounds_matches_on_status_alone() {
    let filter = StatusFilter::new(TaskStatus::InProgress, None, None);

    assert!(filter.matches(&stored(1, date(1999, 1, 1), TaskStatus::InProgress)));
    assert!(filter.matches(&stored(2, date(2099, 1, 1), TaskStatus::InProgress)));
    assert!(!filter.matches(&stored(3, date(2024, 1, 1), TaskStatus::Completed)));
}

#[rstest]
fn filter_with_start_only_is_open_ended_above() {
    let filter = StatusFilter::new(TaskStatus::NotStarted, Some(date(2024, 6, 1)), None);

    assert!(!filter.matches(&stored(1, date(2024, 5, 31), TaskStatus::NotStarted)));
    assert!(filter.matches(&stored(2, date(2024, 6, 1), TaskStatus::NotStarted)));
    assert!(filter.matches(&stored(3, date(2030, 1, 1), TaskStatus::NotStarted)));
}

#[rstest]
fn filter_with_end_only_is_open_ended_below() {
    let filter = StatusFilter::new(TaskStatus::NotStarted, None, Some(date(2024, 6, 1)));

    assert!(filter.matches(&stored(1, date(1990, 1, 1), TaskStatus::NotStarted)));
    assert!(filter.matches(&stored(2, date(2024, 6, 1), TaskStatus::NotStarted)));
    assert!(!filter.matches(&stored(3, date(2024, 6, 2), TaskStatus::NotStarted)));
}

#[rstest]
fn filter_with_both_bounds_is_inclusive() {
    let filter = StatusFilter::new(
        TaskStatus::Completed,
        Some(date(2024, 6, 1)),
        Some(date(2024, 6, 30)),
    );

    assert!(filter.matches(&stored(1, date(2024, 6, 1), TaskStatus::Completed)));
    assert!(filter.matches(&stored(2, date(2024, 6, 30), TaskStatus::Completed)));
    assert!(!filter.matches(&stored(3, date(2024, 5, 31), TaskStatus::Completed)));
    assert!(!filter.matches(&stored(4, date(2024, 7, 1), TaskStatus::Completed)));
}
