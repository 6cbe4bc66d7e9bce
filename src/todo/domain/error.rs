//! Error types for task status parsing and validation.

use thiserror::Error;

/// Error returned while parsing status text into the closed enumeration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseStatusError(pub String);

/// Errors raised by the pre-write status validation check.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidStatusError {
    /// The task carries no status value at all.
    #[error("task status is not set")]
    Missing,

    /// The task carries status text outside the enumeration.
    #[error(transparent)]
    Unrecognised(#[from] ParseStatusError),
}
