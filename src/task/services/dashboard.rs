//! Service layer for the "due today" listing and task completion.

use crate::task::{
    domain::{Task, TaskDomainError, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, NaiveTime, TimeDelta, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Milliseconds from the start of a UTC day to its last millisecond.
const LAST_MILLISECOND_OF_DAY: i64 = 86_399_999;

/// Service-level errors for dashboard operations.
#[derive(Debug, Error)]
pub enum TaskDashboardError {
    /// The task cannot change status.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// No task has the identifier.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for dashboard operations.
pub type TaskDashboardResult<T> = Result<T, TaskDashboardError>;

/// Lists due tasks and completes them.
#[derive(Clone)]
pub struct TaskDashboardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskDashboardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new dashboard service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns open tasks due during the current UTC day, earliest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDashboardError::Repository`] when the query fails.
    pub async fn list_due_today(&self) -> TaskDashboardResult<Vec<Task>> {
        let (start, end) = utc_day_bounds(self.clock.utc());
        tracing::debug!(%start, %end, "listing tasks due today");
        Ok(self.repository.list_open_due_between(start, end).await?)
    }

    /// Marks the task as completed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDashboardError::TaskNotFound`] when the task does not
    /// exist, [`TaskDashboardError::Domain`] when it is already completed,
    /// and [`TaskDashboardError::Repository`] when persistence fails.
    pub async fn complete_task(&self, id: TaskId) -> TaskDashboardResult<Task> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskDashboardError::TaskNotFound(id))?;
        task.complete()?;

        self.repository.update(&task).await.map_err(|err| match err {
            TaskRepositoryError::NotFound(missing) => TaskDashboardError::TaskNotFound(missing),
            other => TaskDashboardError::Repository(other),
        })?;

        tracing::info!(task_id = %id, "task completed");
        Ok(task)
    }
}

/// Returns the first and last millisecond of the UTC day containing `now`.
#[must_use]
pub fn utc_day_bounds(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    let end = start + TimeDelta::milliseconds(LAST_MILLISECOND_OF_DAY);
    (start, end)
}
