//! Application services for to-do task orchestration.

mod todo_task;
mod validation;

pub use todo_task::{TodoTaskService, TodoTaskServiceError, TodoTaskServiceResult};
pub use validation::validate_status;
