//! SQL schema for the Rollcall SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `PRAGMA user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// Deliberately absent constraints: no UNIQUE on `(username, name)` —
/// duplicate subject registrations are permitted — and no foreign key from
/// `attendance_records` to `subjects`, so a record for an unregistered
/// subject name is accepted.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS subjects (
    subject_id     TEXT PRIMARY KEY,
    username       TEXT NOT NULL,
    name           TEXT NOT NULL,
    min_percentage INTEGER NOT NULL,
    created_at     TEXT NOT NULL    -- ISO 8601 UTC; store-assigned
);

-- Attendance records are strictly append-only.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS attendance_records (
    record_id    TEXT PRIMARY KEY,
    username     TEXT NOT NULL,
    subject_name TEXT NOT NULL,
    attended     INTEGER NOT NULL,  -- 0 | 1
    date         TEXT NOT NULL,     -- ISO 8601 calendar date
    recorded_at  TEXT NOT NULL      -- ISO 8601 UTC; store-assigned
);

CREATE INDEX IF NOT EXISTS subjects_user_idx
    ON subjects(username);
CREATE INDEX IF NOT EXISTS records_user_subject_idx
    ON attendance_records(username, subject_name);

PRAGMA user_version = 1;
";
