//! Task aggregate root and related lifecycle types.

use super::{
    Application, ApplicationId, DueAt, ParseTaskKindError, ParseTaskStatusError, TaskDomainError,
    TaskId, TenantId,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of work a task represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Phone call.
    Call,
    /// Email follow-up.
    Email,
    /// Document or application review.
    Review,
}

impl TaskKind {
    /// Every supported task kind, in display order.
    pub const ALL: [Self; 3] = [Self::Call, Self::Email, Self::Review];

    /// Returns the canonical wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Email => "email",
            Self::Review => "review",
        }
    }

    /// Returns the accepted string values.
    #[must_use]
    pub fn allowed_values() -> Vec<&'static str> {
        Self::ALL.iter().map(|kind| kind.as_str()).collect()
    }
}

impl TryFrom<&str> for TaskKind {
    type Error = ParseTaskKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| ParseTaskKindError(value.to_owned()))
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task is waiting to be worked.
    Open,
    /// Task has been completed. Terminal.
    Completed,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Completed => "completed",
        }
    }

    /// Returns `true` when no further transitions are permitted.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }

}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "open" => Ok(Self::Open),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task aggregate root.
///
/// Built only through [`Task::new_for_application`] or
/// [`Task::from_persisted`]; the HTTP layer renders its own wire form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    application_id: ApplicationId,
    tenant_id: TenantId,
    kind: TaskKind,
    due_at: DueAt,
    status: TaskStatus,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning application.
    pub application_id: ApplicationId,
    /// Tenant copied from the application at creation time.
    pub tenant_id: TenantId,
    /// Persisted task kind.
    pub kind: TaskKind,
    /// Persisted due date.
    pub due_at: DueAt,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new open task owned by `application`.
    ///
    /// The tenant is copied from the application so that tasks can be
    /// filtered by tenant without a join.
    #[must_use]
    pub fn new_for_application(
        application: &Application,
        kind: TaskKind,
        due_at: DueAt,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: TaskId::new(),
            application_id: application.id().clone(),
            tenant_id: application.tenant_id().clone(),
            kind,
            due_at,
            status: TaskStatus::Open,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            application_id: data.application_id,
            tenant_id: data.tenant_id,
            kind: data.kind,
            due_at: data.due_at,
            status: data.status,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning application.
    #[must_use]
    pub const fn application_id(&self) -> &ApplicationId {
        &self.application_id
    }

    /// Returns the tenant copied from the owning application.
    #[must_use]
    pub const fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    /// Returns the task kind.
    #[must_use]
    pub const fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_at(&self) -> DueAt {
        self.due_at
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Marks the task as completed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::AlreadyCompleted`] when the task is
    /// already in the terminal status.
    pub fn complete(&mut self) -> Result<(), TaskDomainError> {
        if self.status.is_terminal() {
            return Err(TaskDomainError::AlreadyCompleted(self.id));
        }
        self.status = TaskStatus::Completed;
        Ok(())
    }
}
