//! The attendance service — validation and read/write sequencing over any
//! [`rollcall_core::store::AttendanceStore`].
//!
//! One service instance corresponds to one user-facing session. Operations
//! are strictly request/response: each call runs to completion against the
//! store before the next begins, and nothing executes in the background.

pub mod error;
mod service;

pub use error::ServiceError;
pub use service::AttendanceService;

#[cfg(test)]
mod tests;
