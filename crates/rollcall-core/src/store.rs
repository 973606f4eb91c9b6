//! The `AttendanceStore` trait — the persistence boundary.
//!
//! The trait is implemented by storage backends (e.g.
//! `rollcall-store-sqlite`). The service layer depends on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use crate::{
  record::{AttendanceRecord, NewAttendanceRecord},
  subject::{NewSubject, Subject},
  summary::AttendanceSummary,
};

/// Abstraction over an attendance storage backend.
///
/// Subjects are insert-only; attendance records are strictly append-only.
/// No operation here updates or deletes an existing row.
///
/// All methods return `Send` futures so the trait can be used from
/// multi-threaded async runtimes.
pub trait AttendanceStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Subjects ──────────────────────────────────────────────────────────

  /// Persist a new subject and return it with its store-assigned identity.
  ///
  /// Duplicate names for the same user are accepted; no uniqueness is
  /// enforced here.
  fn add_subject(
    &self,
    input: NewSubject,
  ) -> impl Future<Output = Result<Subject, Self::Error>> + Send + '_;

  /// All subjects belonging to `username`, in storage order.
  fn list_subjects<'a>(
    &'a self,
    username: &'a str,
  ) -> impl Future<Output = Result<Vec<Subject>, Self::Error>> + Send + 'a;

  // ── Attendance — append-only writes ───────────────────────────────────

  /// Append one attendance record and return the persisted
  /// [`AttendanceRecord`]. The `recorded_at` timestamp is set by the store.
  ///
  /// The subject name is not checked against registered subjects.
  fn record_attendance(
    &self,
    input: NewAttendanceRecord,
  ) -> impl Future<Output = Result<AttendanceRecord, Self::Error>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Count total and attended records for `(username, subject_name)`.
  /// A pair with no records yields the zero summary.
  fn attendance_counts<'a>(
    &'a self,
    username: &'a str,
    subject_name: &'a str,
  ) -> impl Future<Output = Result<AttendanceSummary, Self::Error>> + Send + 'a;
}
