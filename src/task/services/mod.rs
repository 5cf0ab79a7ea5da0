//! Application services for task creation and the dashboard.

mod creation;
mod dashboard;
mod validation;

pub use creation::{TaskCreationError, TaskCreationResult, TaskCreationService};
pub use dashboard::{
    TaskDashboardError, TaskDashboardResult, TaskDashboardService, utc_day_bounds,
};
pub use validation::{CreateTaskRequest, REQUIRED_FIELDS, TaskValidationError, ValidatedTask};
