//! Subject — a user-defined course tracked for attendance.
//!
//! A subject holds only registration metadata. Attendance itself lives in the
//! append-only record history and is summarised on read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Result, ValidationError};

/// A registered subject, owned by exactly one user.
///
/// Subjects are created once and never mutated or deleted. Nothing prevents a
/// user from registering the same name twice; duplicates list separately and
/// share one attendance history (records aggregate by name).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
  pub subject_id:     Uuid,
  /// Opaque identifier supplied by the caller's session layer.
  pub username:       String,
  pub name:           String,
  /// Minimum required attendance, in whole percent.
  pub min_percentage: u32,
  /// Store-assigned timestamp; never changes after creation.
  pub created_at:     DateTime<Utc>,
}

/// Validated input to [`crate::store::AttendanceStore::add_subject`].
///
/// Constructed only through [`NewSubject::parse`], so a value of this type is
/// proof the registration input passed validation. `subject_id` and
/// `created_at` are always assigned by the store.
#[derive(Debug, Clone)]
pub struct NewSubject {
  pub username:       String,
  pub name:           String,
  pub min_percentage: u32,
}

impl NewSubject {
  /// Validate raw registration input as it arrives from the caller.
  ///
  /// `min_percentage` is accepted as text because that is what input surfaces
  /// produce. Checks run in order: emptiness of either field, then numeric
  /// parse, then sign.
  pub fn parse(
    username: &str,
    name: &str,
    min_percentage: &str,
  ) -> Result<Self> {
    let name = name.trim();
    let min_percentage = min_percentage.trim();

    if name.is_empty() || min_percentage.is_empty() {
      return Err(ValidationError::EmptyField);
    }

    let value: i64 = min_percentage
      .parse()
      .map_err(|_| ValidationError::NotANumber)?;
    if value < 0 {
      return Err(ValidationError::NegativePercentage);
    }
    let min_percentage =
      u32::try_from(value).map_err(|_| ValidationError::NotANumber)?;

    Ok(Self {
      username: username.to_owned(),
      name: name.to_owned(),
      min_percentage,
    })
  }
}
