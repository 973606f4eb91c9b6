//! Service-level tests against the real SQLite store in memory.

use chrono::NaiveDate;
use rollcall_core::ValidationError;
use rollcall_store_sqlite::SqliteStore;

use crate::{AttendanceService, ServiceError};

async fn service() -> AttendanceService<SqliteStore> {
  let store = SqliteStore::open_in_memory()
    .await
    .expect("in-memory store");
  AttendanceService::new(store)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ─── Registration validation ──────────────────────────────────────────────────

#[tokio::test]
async fn add_subject_rejects_empty_name_without_touching_storage() {
  let mut svc = service().await;

  let err = svc.add_subject("alice", "", "75").await.unwrap_err();
  assert!(matches!(
    err,
    ServiceError::Validation(ValidationError::EmptyField)
  ));

  assert!(svc.list_subjects("alice").await.unwrap().is_empty());
}

#[tokio::test]
async fn add_subject_rejects_negative_percentage() {
  let mut svc = service().await;

  let err = svc.add_subject("alice", "Math", "-1").await.unwrap_err();
  assert!(matches!(
    err,
    ServiceError::Validation(ValidationError::NegativePercentage)
  ));
  assert!(err.is_validation());

  assert!(svc.list_subjects("alice").await.unwrap().is_empty());
}

#[tokio::test]
async fn add_subject_rejects_non_numeric_percentage() {
  let mut svc = service().await;

  let err = svc
    .add_subject("alice", "Math", "seventy-five")
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    ServiceError::Validation(ValidationError::NotANumber)
  ));

  assert!(svc.list_subjects("alice").await.unwrap().is_empty());
}

#[tokio::test]
async fn add_subject_returns_persisted_subject() {
  let mut svc = service().await;

  let subject = svc.add_subject("alice", "Math", "75").await.unwrap();
  assert_eq!(subject.name, "Math");
  assert_eq!(subject.min_percentage, 75);
  assert_eq!(subject.username, "alice");
}

// ─── Listing and the session cache ────────────────────────────────────────────

#[tokio::test]
async fn list_pairs_each_subject_with_its_summary() {
  let mut svc = service().await;
  svc.add_subject("alice", "Math", "75").await.unwrap();
  svc.add_subject("alice", "Physics", "60").await.unwrap();

  svc.mark_attendance("alice", "Math", true, Some(date(2024, 9, 2)))
    .await
    .unwrap();

  let overviews = svc.list_subjects("alice").await.unwrap();
  assert_eq!(overviews.len(), 2);

  let math = &overviews[0];
  assert_eq!(math.subject.name, "Math");
  assert_eq!(math.summary.total_classes, 1);
  assert_eq!(math.summary.attended, 1);

  let physics = &overviews[1];
  assert_eq!(physics.subject.name, "Physics");
  assert_eq!(physics.summary.total_classes, 0);
}

#[tokio::test]
async fn registration_invalidates_cached_subject_list() {
  let mut svc = service().await;
  svc.add_subject("alice", "Math", "75").await.unwrap();

  // Prime the cache, then register another subject.
  assert_eq!(svc.list_subjects("alice").await.unwrap().len(), 1);
  svc.add_subject("alice", "Physics", "60").await.unwrap();

  let names: Vec<_> = svc
    .list_subjects("alice")
    .await
    .unwrap()
    .into_iter()
    .map(|o| o.subject.name)
    .collect();
  assert_eq!(names, ["Math", "Physics"]);
}

#[tokio::test]
async fn cached_subjects_still_get_fresh_summaries() {
  let mut svc = service().await;
  svc.add_subject("alice", "Math", "75").await.unwrap();

  // Prime the cache; marking must still show up in the next list.
  svc.list_subjects("alice").await.unwrap();
  svc.mark_attendance("alice", "Math", true, Some(date(2024, 9, 2)))
    .await
    .unwrap();

  let overviews = svc.list_subjects("alice").await.unwrap();
  assert_eq!(overviews[0].summary.total_classes, 1);
  assert_eq!(overviews[0].summary.attended, 1);
}

#[tokio::test]
async fn lists_are_scoped_per_user() {
  let mut svc = service().await;
  svc.add_subject("alice", "Math", "75").await.unwrap();
  svc.add_subject("bob", "History", "50").await.unwrap();

  let alice = svc.list_subjects("alice").await.unwrap();
  assert_eq!(alice.len(), 1);
  assert_eq!(alice[0].subject.name, "Math");

  let bob = svc.list_subjects("bob").await.unwrap();
  assert_eq!(bob.len(), 1);
  assert_eq!(bob[0].subject.name, "History");
}

// ─── Marking and summaries ────────────────────────────────────────────────────

#[tokio::test]
async fn present_mark_increments_total_and_attended() {
  let mut svc = service().await;
  svc.add_subject("alice", "Math", "75").await.unwrap();

  let before = svc.summarize("alice", "Math").await.unwrap();
  svc.mark_attendance("alice", "Math", true, Some(date(2024, 9, 2)))
    .await
    .unwrap();
  let after = svc.summarize("alice", "Math").await.unwrap();

  assert_eq!(after.total_classes, before.total_classes + 1);
  assert_eq!(after.attended, before.attended + 1);
}

#[tokio::test]
async fn absent_mark_increments_total_only() {
  let mut svc = service().await;
  svc.add_subject("alice", "Math", "75").await.unwrap();

  svc.mark_attendance("alice", "Math", true, Some(date(2024, 9, 2)))
    .await
    .unwrap();
  let before = svc.summarize("alice", "Math").await.unwrap();

  svc.mark_attendance("alice", "Math", false, Some(date(2024, 9, 3)))
    .await
    .unwrap();
  let after = svc.summarize("alice", "Math").await.unwrap();

  assert_eq!(after.total_classes, before.total_classes + 1);
  assert_eq!(after.attended, before.attended);
}

#[tokio::test]
async fn mark_defaults_to_today() {
  let mut svc = service().await;

  let record = svc
    .mark_attendance("alice", "Math", true, None)
    .await
    .unwrap();
  assert_eq!(record.date, chrono::Local::now().date_naive());
}

#[tokio::test]
async fn marking_unknown_subject_is_accepted() {
  let mut svc = service().await;

  // No registered subject; the record path stays permissive.
  svc.mark_attendance("alice", "Astronomy", true, Some(date(2024, 9, 2)))
    .await
    .unwrap();

  let summary = svc.summarize("alice", "Astronomy").await.unwrap();
  assert_eq!(summary.total_classes, 1);
  assert_eq!(summary.attended, 1);

  // ... and it never surfaces in the list until a subject exists.
  assert!(svc.list_subjects("alice").await.unwrap().is_empty());
}

#[tokio::test]
async fn summarize_is_idempotent_between_marks() {
  let mut svc = service().await;
  svc.add_subject("alice", "Math", "75").await.unwrap();
  svc.mark_attendance("alice", "Math", true, Some(date(2024, 9, 2)))
    .await
    .unwrap();

  let first = svc.summarize("alice", "Math").await.unwrap();
  let second = svc.summarize("alice", "Math").await.unwrap();
  assert_eq!(first, second);
}

// ─── End to end ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn three_present_one_absent_is_seventy_five_percent() {
  let mut svc = service().await;
  svc.add_subject("alice", "Math", "75").await.unwrap();

  for day in 2..=4 {
    svc.mark_attendance("alice", "Math", true, Some(date(2024, 9, day)))
      .await
      .unwrap();
  }
  svc.mark_attendance("alice", "Math", false, Some(date(2024, 9, 5)))
    .await
    .unwrap();

  let summary = svc.summarize("alice", "Math").await.unwrap();
  assert_eq!(summary.total_classes, 4);
  assert_eq!(summary.attended, 3);
  assert_eq!(summary.percentage(), 75);

  let overviews = svc.list_subjects("alice").await.unwrap();
  assert_eq!(overviews[0].summary, summary);
}
