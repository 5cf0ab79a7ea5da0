//! Domain model for task creation and completion.
//!
//! The task domain models applications, tenant scoping, task kinds, due
//! dates, and the `open → completed` status lifecycle while keeping all
//! infrastructure concerns outside of the domain boundary.

mod application;
mod due_at;
mod error;
mod ids;
mod task;

pub use application::Application;
pub use due_at::{DUE_AT_FORMAT_HINT, DueAt, format_timestamp};
pub use error::{ParseTaskKindError, ParseTaskStatusError, TaskDomainError};
pub use ids::{ApplicationId, TaskId, TenantId};
pub use task::{PersistedTaskData, Task, TaskKind, TaskStatus};
