//! Domain model for to-do task management.
//!
//! The task domain models the to-do record in its two in-process shapes
//! (free-text-status entity and enumerated-status persistence record),
//! the closed status enumeration, and the filter and pagination value
//! types shared by the read and delete query paths. Infrastructure
//! concerns stay outside the domain boundary.

mod error;
mod filter;
mod status;
mod task;

pub use error::{InvalidStatusError, ParseStatusError};
pub use filter::{DEFAULT_PAGE_LIMIT, Page, StatusFilter};
pub use status::TaskStatus;
pub use task::{StoredTask, TodoTask};

pub(crate) use task::UNASSIGNED_ID;
