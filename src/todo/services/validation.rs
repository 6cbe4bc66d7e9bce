//! Pre-write status validation.
//!
//! Validation is a service-level policy: the repository port is not
//! gated by it, so direct store operations remain possible. The service
//! calls [`validate_status`] before every insert and update.

use crate::todo::domain::{InvalidStatusError, TaskStatus, TodoTask};

/// Checks that the entity carries a status from the closed enumeration.
///
/// # Errors
///
/// Returns [`InvalidStatusError::Missing`] when the status is unset and
/// [`InvalidStatusError::Unrecognised`] when the text does not name an
/// enumeration member.
pub fn validate_status(task: &TodoTask) -> Result<(), InvalidStatusError> {
    let raw = task.status.as_deref().ok_or(InvalidStatusError::Missing)?;
    TaskStatus::try_from(raw)?;
    Ok(())
}
