//! Service error type.

use rollcall_core::ValidationError;
use thiserror::Error;

/// An error returned by a service operation. The `Display` output is the
/// user-visible message; callers surface it as-is.
#[derive(Debug, Error)]
pub enum ServiceError {
  /// Caller-correctable input problem; storage was not touched.
  #[error(transparent)]
  Validation(#[from] ValidationError),

  /// The storage backend failed; no partial state change occurred.
  #[error("storage error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ServiceError {
  pub fn is_validation(&self) -> bool {
    matches!(self, Self::Validation(_))
  }
}

pub type Result<T, E = ServiceError> = std::result::Result<T, E>;
