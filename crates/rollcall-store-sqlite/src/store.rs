//! [`SqliteStore`] — the SQLite implementation of [`AttendanceStore`].

use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use rollcall_core::{
  record::{AttendanceRecord, NewAttendanceRecord},
  store::AttendanceStore,
  subject::{NewSubject, Subject},
  summary::AttendanceSummary,
};

use crate::{
  Error, Result,
  encode::{RawRecord, RawSubject, decode_count, encode_date, encode_dt, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ────────────────────────────────────────────────────────────────────

/// An attendance store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. All writes
/// go through the one connection, which serialises them on its own thread.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── AttendanceStore impl ─────────────────────────────────────────────────────

impl AttendanceStore for SqliteStore {
  type Error = Error;

  // ── Subjects ──────────────────────────────────────────────────────────────

  async fn add_subject(&self, input: NewSubject) -> Result<Subject> {
    let subject = Subject {
      subject_id:     Uuid::new_v4(),
      username:       input.username,
      name:           input.name,
      min_percentage: input.min_percentage,
      created_at:     Utc::now(),
    };

    let id_str   = encode_uuid(subject.subject_id);
    let username = subject.username.clone();
    let name     = subject.name.clone();
    let min_pct  = i64::from(subject.min_percentage);
    let at_str   = encode_dt(subject.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO subjects (subject_id, username, name, min_percentage, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id_str, username, name, min_pct, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(subject)
  }

  async fn list_subjects(&self, username: &str) -> Result<Vec<Subject>> {
    let username = username.to_owned();

    let raws: Vec<RawSubject> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT subject_id, username, name, min_percentage, created_at
           FROM subjects WHERE username = ?1",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![username], |row| {
            Ok(RawSubject {
              subject_id:     row.get(0)?,
              username:       row.get(1)?,
              name:           row.get(2)?,
              min_percentage: row.get(3)?,
              created_at:     row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawSubject::into_subject).collect()
  }

  // ── Attendance — append-only writes ───────────────────────────────────────

  async fn record_attendance(
    &self,
    input: NewAttendanceRecord,
  ) -> Result<AttendanceRecord> {
    let record = AttendanceRecord {
      record_id:    Uuid::new_v4(),
      username:     input.username,
      subject_name: input.subject_name,
      attended:     input.attended,
      date:         input.date,
      recorded_at:  Utc::now(),
    };

    let id_str       = encode_uuid(record.record_id);
    let username     = record.username.clone();
    let subject_name = record.subject_name.clone();
    let attended     = record.attended;
    let date_str     = encode_date(record.date);
    let at_str       = encode_dt(record.recorded_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO attendance_records (record_id, username, subject_name, attended, date, recorded_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![id_str, username, subject_name, attended, date_str, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(record)
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn attendance_counts(
    &self,
    username: &str,
    subject_name: &str,
  ) -> Result<AttendanceSummary> {
    let username     = username.to_owned();
    let subject_name = subject_name.to_owned();

    let (total, attended): (i64, i64) = self
      .conn
      .call(move |conn| {
        let counts = conn.query_row(
          "SELECT COUNT(*), COALESCE(SUM(attended), 0)
           FROM attendance_records
           WHERE username = ?1 AND subject_name = ?2",
          rusqlite::params![username, subject_name],
          |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(counts)
      })
      .await?;

    Ok(AttendanceSummary {
      total_classes: decode_count("total_classes", total)?,
      attended:      decode_count("attended", attended)?,
    })
  }
}

// ─── Record history (diagnostics) ─────────────────────────────────────────────

impl SqliteStore {
  /// Full record history for `(username, subject_name)`, oldest first.
  /// Not part of [`AttendanceStore`]; used by inspection tooling and tests.
  pub async fn attendance_history(
    &self,
    username: &str,
    subject_name: &str,
  ) -> Result<Vec<AttendanceRecord>> {
    let username     = username.to_owned();
    let subject_name = subject_name.to_owned();

    let raws: Vec<RawRecord> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT record_id, username, subject_name, attended, date, recorded_at
           FROM attendance_records
           WHERE username = ?1 AND subject_name = ?2
           ORDER BY recorded_at",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![username, subject_name], |row| {
            Ok(RawRecord {
              record_id:    row.get(0)?,
              username:     row.get(1)?,
              subject_name: row.get(2)?,
              attended:     row.get(3)?,
              date:         row.get(4)?,
              recorded_at:  row.get(5)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawRecord::into_record).collect()
  }
}
