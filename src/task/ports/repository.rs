//! Repository port for task persistence and dashboard queries.

use crate::task::domain::{Task, TaskId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result alias for [`TaskRepository`] calls.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Storage for tasks: creation, status updates, and the day listing.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Inserts a new task and returns it as submitted.
    ///
    /// # Errors
    ///
    /// Fails with [`TaskRepositoryError::DuplicateTask`] on an identifier
    /// collision and [`TaskRepositoryError::Persistence`] when the store
    /// rejects the row.
    async fn insert(&self, task: &Task) -> TaskRepositoryResult<Task>;

    /// Persists the status of an existing task.
    ///
    /// Only the status is written; every other field is immutable after
    /// creation.
    ///
    /// # Errors
    ///
    /// Fails with [`TaskRepositoryError::NotFound`] for an unknown task.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Loads one task, or `None` for an unknown identifier.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns tasks that are not completed and fall due within
    /// `[start, end]` (both inclusive), ordered by due date ascending.
    async fn list_open_due_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> TaskRepositoryResult<Vec<Task>>;
}

/// Failures reported by [`TaskRepository`] adapters.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The identifier is already taken.
    #[error("task {0} already exists")]
    DuplicateTask(TaskId),

    /// No task has this identifier.
    #[error("task {0} does not exist")]
    NotFound(TaskId),

    /// The backing store failed.
    #[error("task store failure: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps an adapter error as [`TaskRepositoryError::Persistence`].
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
