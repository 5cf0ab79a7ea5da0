//! Port contracts for task creation and the dashboard.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod application;
pub mod repository;

pub use application::{
    ApplicationDirectory, ApplicationDirectoryError, ApplicationDirectoryResult,
};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
