//! Service layer for validated task creation.

use super::validation::{CreateTaskRequest, TaskValidationError};
use crate::task::{
    domain::{ApplicationId, Task},
    ports::{ApplicationDirectory, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task creation.
#[derive(Debug, Error)]
pub enum TaskCreationError {
    /// The request failed input validation.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),

    /// The referenced application does not exist or could not be looked up.
    #[error("application not found: {application_id}")]
    ApplicationNotFound {
        /// The identifier that was searched.
        application_id: ApplicationId,
    },

    /// The store rejected the new task row.
    #[error("failed to insert task: {0}")]
    InsertFailed(#[source] TaskRepositoryError),
}

/// Result type for task creation.
pub type TaskCreationResult<T> = Result<T, TaskCreationError>;

/// Validates creation requests and persists new tasks.
///
/// Performs at most one application lookup and one task insert per request.
/// The lookup and insert are not wrapped in a transaction.
#[derive(Clone)]
pub struct TaskCreationService<A, R, C>
where
    A: ApplicationDirectory,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    applications: Arc<A>,
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<A, R, C> TaskCreationService<A, R, C>
where
    A: ApplicationDirectory,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task creation service.
    #[must_use]
    pub const fn new(applications: Arc<A>, repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            applications,
            repository,
            clock,
        }
    }

    /// Validates `request`, resolves its application, and inserts an open
    /// task carrying the application's tenant.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCreationError::Validation`] for invalid input,
    /// [`TaskCreationError::ApplicationNotFound`] when the application cannot
    /// be resolved, and [`TaskCreationError::InsertFailed`] when persistence
    /// fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskCreationResult<Task> {
        let validated = request.validate(self.clock.utc())?;

        let application = match self.applications.find_by_id(&validated.application_id).await {
            Ok(Some(application)) => application,
            Ok(None) => {
                return Err(TaskCreationError::ApplicationNotFound {
                    application_id: validated.application_id,
                });
            }
            Err(err) => {
                tracing::warn!(
                    application_id = %validated.application_id,
                    error = %err,
                    "application lookup failed"
                );
                return Err(TaskCreationError::ApplicationNotFound {
                    application_id: validated.application_id,
                });
            }
        };

        let task =
            Task::new_for_application(&application, validated.kind, validated.due_at, &*self.clock);
        let stored = self.repository.insert(&task).await.map_err(|err| {
            tracing::error!(task_id = %task.id(), error = %err, "task insert failed");
            TaskCreationError::InsertFailed(err)
        })?;

        tracing::info!(
            task_id = %stored.id(),
            application_id = %stored.application_id(),
            tenant_id = %stored.tenant_id(),
            kind = %stored.kind(),
            due_at = %stored.due_at(),
            "task created"
        );
        Ok(stored)
    }
}
