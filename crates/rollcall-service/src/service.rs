//! [`AttendanceService`] — the operations the presentation layer calls.

use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use rollcall_core::{
  record::{AttendanceRecord, NewAttendanceRecord},
  store::AttendanceStore,
  subject::{NewSubject, Subject},
  summary::{AttendanceSummary, SubjectOverview},
};

use crate::error::{Result, ServiceError};

/// Attendance operations for one session, backed by a store `S`.
///
/// The service caches each user's subject list between reads; a successful
/// registration drops that user's entry so the next list reflects it.
/// Summaries are never cached — every read re-derives from record history.
///
/// Methods take `&mut self`: the session model is strictly sequential, so
/// the cache is a plain map rather than a lock. Hosts running multiple
/// sessions give each its own service instance over a shared store.
pub struct AttendanceService<S> {
  store:         S,
  subject_cache: HashMap<String, Vec<Subject>>,
}

impl<S: AttendanceStore> AttendanceService<S> {
  pub fn new(store: S) -> Self {
    Self { store, subject_cache: HashMap::new() }
  }

  // ── Registration ──────────────────────────────────────────────────────────

  /// Validate and register a subject for `username`.
  ///
  /// `min_percentage` arrives as raw text from the input surface. On any
  /// validation failure the store is not touched. On success the user's
  /// cached subject list is invalidated and the persisted subject returned.
  pub async fn add_subject(
    &mut self,
    username: &str,
    name: &str,
    min_percentage: &str,
  ) -> Result<Subject> {
    let input = NewSubject::parse(username, name, min_percentage)?;

    let subject = self
      .store
      .add_subject(input)
      .await
      .map_err(|e| ServiceError::Store(Box::new(e)))?;

    self.subject_cache.remove(username);
    tracing::debug!(%username, subject = %subject.name, "registered subject");
    Ok(subject)
  }

  // ── Listing ───────────────────────────────────────────────────────────────

  /// All subjects for `username`, each paired with a freshly computed
  /// summary, in storage order.
  ///
  /// All-or-nothing: a storage failure yields an error, never a partial
  /// list. Subject rows may come from the session cache; counts always come
  /// from the store.
  pub async fn list_subjects(
    &mut self,
    username: &str,
  ) -> Result<Vec<SubjectOverview>> {
    let subjects = match self.subject_cache.get(username).cloned() {
      Some(cached) => cached,
      None => {
        let loaded = self
          .store
          .list_subjects(username)
          .await
          .map_err(|e| ServiceError::Store(Box::new(e)))?;
        self
          .subject_cache
          .insert(username.to_owned(), loaded.clone());
        loaded
      }
    };

    let mut overviews = Vec::with_capacity(subjects.len());
    for subject in subjects {
      let summary = self.summarize(username, &subject.name).await?;
      overviews.push(SubjectOverview { subject, summary });
    }
    Ok(overviews)
  }

  // ── Marking ───────────────────────────────────────────────────────────────

  /// Append one presence/absence record. `date` defaults to today in the
  /// local clock.
  ///
  /// The subject name is not checked against registered subjects, and repeat
  /// marks on the same day accumulate. This is the single state-mutating
  /// operation; once committed it is append-only history with no rollback.
  pub async fn mark_attendance(
    &mut self,
    username: &str,
    subject_name: &str,
    attended: bool,
    date: Option<NaiveDate>,
  ) -> Result<AttendanceRecord> {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let input =
      NewAttendanceRecord::new(username, subject_name, attended, date);

    let record = self
      .store
      .record_attendance(input)
      .await
      .map_err(|e| ServiceError::Store(Box::new(e)))?;

    tracing::debug!(
      %username,
      subject = %record.subject_name,
      attended = record.attended,
      date = %record.date,
      "recorded attendance"
    );
    Ok(record)
  }

  // ── Summaries ─────────────────────────────────────────────────────────────

  /// Derive the current summary for `(username, subject_name)` from record
  /// history. A pure read; calling it repeatedly without an intervening
  /// mark yields identical results.
  pub async fn summarize(
    &self,
    username: &str,
    subject_name: &str,
  ) -> Result<AttendanceSummary> {
    self
      .store
      .attendance_counts(username, subject_name)
      .await
      .map_err(|e| ServiceError::Store(Box::new(e)))
  }
}
