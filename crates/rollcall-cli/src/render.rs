//! Plain-text rendering of subjects, summaries, and record history.

use rollcall_core::{
  record::AttendanceRecord,
  summary::{AttendanceSummary, SubjectOverview},
};

/// One list row: registration label plus the current percentage.
pub fn overview_line(overview: &SubjectOverview) -> String {
  format!(
    "{} (Min: {}%)   {}",
    overview.subject.name,
    overview.subject.min_percentage,
    summary_line(&overview.summary),
  )
}

pub fn summary_line(summary: &AttendanceSummary) -> String {
  format!(
    "Attendance: {}% ({}/{})",
    summary.percentage(),
    summary.attended,
    summary.total_classes,
  )
}

pub fn history_line(record: &AttendanceRecord) -> String {
  let mark = if record.attended { "present" } else { "absent" };
  format!("{}  {}", record.date, mark)
}
