//! `POST /create-task` handler.

use super::{ApiState, TaskBody, body::json_response};
use crate::task::{
    domain::{DUE_AT_FORMAT_HINT, TaskKind, format_timestamp},
    ports::{ApplicationDirectory, TaskRepository},
    services::{CreateTaskRequest, REQUIRED_FIELDS, TaskCreationError, TaskValidationError},
};
use axum::{body::Bytes, extract::State, http::StatusCode, response::Response};
use mockable::Clock;
use serde::Deserialize;
use serde_json::json;

/// Request body. Absent and `null` fields both read as missing.
#[derive(Debug, Deserialize)]
struct CreateTaskPayload {
    application_id: Option<String>,
    task_type: Option<String>,
    due_at: Option<String>,
}

impl From<CreateTaskPayload> for CreateTaskRequest {
    fn from(payload: CreateTaskPayload) -> Self {
        Self::from_fields(payload.application_id, payload.task_type, payload.due_at)
    }
}

pub(super) async fn create_task<A, R, C>(
    State(state): State<ApiState<A, R, C>>,
    body: Bytes,
) -> Response
where
    A: ApplicationDirectory,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let payload = match serde_json::from_slice::<CreateTaskPayload>(&body) {
        Ok(payload) => payload,
        Err(err) => {
            return json_response(
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid JSON body", "details": err.to_string() }),
            );
        }
    };

    match state.creation.create_task(payload.into()).await {
        Ok(task) => json_response(
            StatusCode::OK,
            json!({
                "success": true,
                "task_id": task.id().to_string(),
                "task": TaskBody::from(&task),
            }),
        ),
        Err(err) => creation_error_response(&err),
    }
}

fn creation_error_response(err: &TaskCreationError) -> Response {
    match err {
        TaskCreationError::Validation(validation) => {
            tracing::debug!(error = %validation, "rejected task creation request");
            json_response(StatusCode::BAD_REQUEST, validation_body(validation))
        }
        TaskCreationError::ApplicationNotFound { application_id } => json_response(
            StatusCode::NOT_FOUND,
            json!({
                "error": "Application not found",
                "application_id": application_id.as_str(),
            }),
        ),
        TaskCreationError::InsertFailed(cause) => {
            tracing::error!(error = %cause, "failed to create task");
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to create task", "details": cause.to_string() }),
            )
        }
    }
}

fn validation_body(err: &TaskValidationError) -> serde_json::Value {
    match err {
        TaskValidationError::MissingFields { missing } => json!({
            "error": "Missing required fields",
            "required": REQUIRED_FIELDS,
            "missing": missing,
        }),
        TaskValidationError::InvalidType { provided } => {
            let allowed = TaskKind::allowed_values();
            json!({
                "error": format!("Invalid task_type. Must be one of: {}", allowed.join(", ")),
                "allowed": allowed,
                "provided": provided,
            })
        }
        TaskValidationError::InvalidDate { provided } => json!({
            "error": "Invalid date format for due_at",
            "hint": DUE_AT_FORMAT_HINT,
            "provided": provided,
        }),
        TaskValidationError::PastDate {
            provided,
            server_time,
        } => json!({
            "error": "due_at must be a future timestamp",
            "provided": provided,
            "server_time": format_timestamp(*server_time),
        }),
    }
}
