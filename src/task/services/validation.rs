//! Ordered validation of task creation requests.
//!
//! Checks run in a fixed order and the first failure wins: presence, task
//! type, due-date format, then due date in the future.

use crate::task::domain::{ApplicationId, DUE_AT_FORMAT_HINT, DueAt, TaskKind};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Request fields that must be present and non-empty.
pub const REQUIRED_FIELDS: [&str; 3] = ["application_id", "task_type", "due_at"];

/// Raw task creation request as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTaskRequest {
    application_id: Option<String>,
    task_type: Option<String>,
    due_at: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with every field present.
    #[must_use]
    pub fn new(
        application_id: impl Into<String>,
        task_type: impl Into<String>,
        due_at: impl Into<String>,
    ) -> Self {
        Self::from_fields(
            Some(application_id.into()),
            Some(task_type.into()),
            Some(due_at.into()),
        )
    }

    /// Creates a request from fields that may be absent.
    #[must_use]
    pub const fn from_fields(
        application_id: Option<String>,
        task_type: Option<String>,
        due_at: Option<String>,
    ) -> Self {
        Self {
            application_id,
            task_type,
            due_at,
        }
    }

    /// Validates the request against the server time `now`.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`TaskValidationError`].
    pub fn validate(&self, now: DateTime<Utc>) -> Result<ValidatedTask, TaskValidationError> {
        let (Some(application_id), Some(task_type), Some(due_at)) = (
            present(self.application_id.as_deref()),
            present(self.task_type.as_deref()),
            present(self.due_at.as_deref()),
        ) else {
            return Err(TaskValidationError::MissingFields {
                missing: self.missing_fields(),
            });
        };

        let kind =
            TaskKind::try_from(task_type).map_err(|_| TaskValidationError::InvalidType {
                provided: task_type.to_owned(),
            })?;

        let parsed_due_at =
            DueAt::parse(due_at).ok_or_else(|| TaskValidationError::InvalidDate {
                provided: due_at.to_owned(),
            })?;

        if !parsed_due_at.is_after(now) {
            return Err(TaskValidationError::PastDate {
                provided: due_at.to_owned(),
                server_time: now,
            });
        }

        Ok(ValidatedTask {
            application_id: ApplicationId::new(application_id),
            kind,
            due_at: parsed_due_at,
        })
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        [
            self.application_id.as_deref(),
            self.task_type.as_deref(),
            self.due_at.as_deref(),
        ]
        .into_iter()
        .zip(REQUIRED_FIELDS)
        .filter(|(value, _)| present(*value).is_none())
        .map(|(_, name)| name)
        .collect()
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

/// A creation request that passed every input check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTask {
    /// Application the task will belong to. Existence is not yet checked.
    pub application_id: ApplicationId,
    /// Requested task kind.
    pub kind: TaskKind,
    /// Parsed due date, strictly after the validation time.
    pub due_at: DueAt,
}

/// Client-caused validation failures for task creation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// One or more required fields are absent or empty.
    #[error("missing required fields: {}", .missing.join(", "))]
    MissingFields {
        /// Names of the fields that were absent or empty.
        missing: Vec<&'static str>,
    },

    /// The task type is not one of the supported kinds.
    #[error("invalid task_type '{provided}', expected one of: call, email, review")]
    InvalidType {
        /// The rejected value.
        provided: String,
    },

    /// The due date could not be parsed.
    #[error("invalid due_at '{provided}': {hint}", hint = DUE_AT_FORMAT_HINT)]
    InvalidDate {
        /// The rejected value.
        provided: String,
    },

    /// The due date is not strictly in the future.
    #[error("due_at '{provided}' is not after server time {server_time}")]
    PastDate {
        /// The rejected value as submitted.
        provided: String,
        /// Server time used for the comparison.
        server_time: DateTime<Utc>,
    },
}
