//! Dashboard handlers: today's tasks and completion.

use super::{ApiState, TaskBody, body::json_response};
use crate::task::{
    domain::{TaskDomainError, TaskId},
    ports::{ApplicationDirectory, TaskRepository},
    services::TaskDashboardError,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use mockable::Clock;
use serde_json::json;
use uuid::Uuid;

pub(super) async fn list_due_today<A, R, C>(State(state): State<ApiState<A, R, C>>) -> Response
where
    A: ApplicationDirectory,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    match state.dashboard.list_due_today().await {
        Ok(tasks) => {
            let bodies: Vec<TaskBody> = tasks.iter().map(TaskBody::from).collect();
            json_response(StatusCode::OK, json!({ "tasks": bodies }))
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to load tasks due today");
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to load tasks", "details": err.to_string() }),
            )
        }
    }
}

pub(super) async fn complete_task<A, R, C>(
    State(state): State<ApiState<A, R, C>>,
    Path(raw_task_id): Path<String>,
) -> Response
where
    A: ApplicationDirectory,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let Ok(uuid) = Uuid::parse_str(&raw_task_id) else {
        return task_not_found(&raw_task_id);
    };

    match state.dashboard.complete_task(TaskId::from_uuid(uuid)).await {
        Ok(task) => json_response(
            StatusCode::OK,
            json!({ "success": true, "task": TaskBody::from(&task) }),
        ),
        Err(TaskDashboardError::TaskNotFound(_)) => task_not_found(&raw_task_id),
        Err(TaskDashboardError::Domain(TaskDomainError::AlreadyCompleted(_))) => json_response(
            StatusCode::CONFLICT,
            json!({ "error": "Task already completed", "task_id": raw_task_id }),
        ),
        Err(err @ TaskDashboardError::Repository(_)) => {
            tracing::error!(task_id = %raw_task_id, error = %err, "failed to complete task");
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to complete task", "details": err.to_string() }),
            )
        }
    }
}

fn task_not_found(raw_task_id: &str) -> Response {
    json_response(
        StatusCode::NOT_FOUND,
        json!({ "error": "Task not found", "task_id": raw_task_id }),
    )
}
