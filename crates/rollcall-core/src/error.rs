//! Error types for `rollcall-core`.

use thiserror::Error;

/// Rejected subject-registration input. Storage is never touched when one of
/// these is returned; the message is suitable for direct display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("subject name and minimum percentage cannot be empty")]
  EmptyField,

  #[error("minimum percentage cannot be negative")]
  NegativePercentage,

  #[error("minimum percentage must be a valid number")]
  NotANumber,
}

pub type Result<T, E = ValidationError> = std::result::Result<T, E>;
