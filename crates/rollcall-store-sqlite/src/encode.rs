//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings, calendar dates as
//! `YYYY-MM-DD`. UUIDs are stored as hyphenated lowercase strings. Counts
//! come back from SQLite as `i64` and are narrowed on read.

use chrono::{DateTime, NaiveDate, Utc};
use rollcall_core::{record::AttendanceRecord, subject::Subject};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── NaiveDate ────────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format("%Y-%m-%d").to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Counts ───────────────────────────────────────────────────────────────────

/// Narrow an SQLite integer to `u32`, naming the column on failure.
pub fn decode_count(column: &str, value: i64) -> Result<u32> {
  u32::try_from(value)
    .map_err(|_| Error::OutOfRange(format!("{column} = {value}")))
}

// ─── Row types ────────────────────────────────────────────────────────────────

/// Raw values read directly from a `subjects` row.
pub struct RawSubject {
  pub subject_id:     String,
  pub username:       String,
  pub name:           String,
  pub min_percentage: i64,
  pub created_at:     String,
}

impl RawSubject {
  pub fn into_subject(self) -> Result<Subject> {
    Ok(Subject {
      subject_id:     decode_uuid(&self.subject_id)?,
      username:       self.username,
      name:           self.name,
      min_percentage: decode_count("min_percentage", self.min_percentage)?,
      created_at:     decode_dt(&self.created_at)?,
    })
  }
}

/// Raw values read directly from an `attendance_records` row.
pub struct RawRecord {
  pub record_id:    String,
  pub username:     String,
  pub subject_name: String,
  pub attended:     bool,
  pub date:         String,
  pub recorded_at:  String,
}

impl RawRecord {
  pub fn into_record(self) -> Result<AttendanceRecord> {
    Ok(AttendanceRecord {
      record_id:    decode_uuid(&self.record_id)?,
      username:     self.username,
      subject_name: self.subject_name,
      attended:     self.attended,
      date:         decode_date(&self.date)?,
      recorded_at:  decode_dt(&self.recorded_at)?,
    })
  }
}
