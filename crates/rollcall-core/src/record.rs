//! Attendance records — the fundamental unit of attendance history.
//!
//! A record is one immutable presence/absence event for a user and subject on
//! a date. Records are never updated or deleted; every summary is derived
//! from the full history at query time.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One presence/absence event. Once written, no field is ever updated.
///
/// Nothing ties `subject_name` to a registered subject: a record for an
/// unknown name is accepted and simply stays invisible until a matching
/// subject exists. Repeat marks on the same day accumulate, one row each.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
  pub record_id:    Uuid,
  pub username:     String,
  pub subject_name: String,
  pub attended:     bool,
  /// The class date the mark refers to, in the caller's local calendar.
  pub date:         NaiveDate,
  /// Store-assigned timestamp; never changes after creation.
  pub recorded_at:  DateTime<Utc>,
}

/// Input to [`crate::store::AttendanceStore::record_attendance`].
/// `record_id` and `recorded_at` are always assigned by the store.
#[derive(Debug, Clone)]
pub struct NewAttendanceRecord {
  pub username:     String,
  pub subject_name: String,
  pub attended:     bool,
  pub date:         NaiveDate,
}

impl NewAttendanceRecord {
  pub fn new(
    username: impl Into<String>,
    subject_name: impl Into<String>,
    attended: bool,
    date: NaiveDate,
  ) -> Self {
    Self {
      username: username.into(),
      subject_name: subject_name.into(),
      attended,
      date,
    }
  }
}
