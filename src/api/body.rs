//! JSON bodies shared by the handlers.

use crate::task::domain::{Task, format_timestamp};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Wire representation of a task.
///
/// Timestamps are RFC 3339 UTC with millisecond precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskBody {
    /// Task identifier.
    pub id: String,
    /// Owning application.
    pub application_id: String,
    /// Tenant copied from the application.
    pub tenant_id: String,
    /// Task kind.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Due timestamp.
    pub due_at: String,
    /// Lifecycle status.
    pub status: &'static str,
    /// Creation timestamp.
    pub created_at: String,
}

impl From<&Task> for TaskBody {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().to_string(),
            application_id: task.application_id().to_string(),
            tenant_id: task.tenant_id().to_string(),
            kind: task.kind().as_str(),
            due_at: task.due_at().to_string(),
            status: task.status().as_str(),
            created_at: format_timestamp(task.created_at()),
        }
    }
}

/// Builds a JSON response with the given status.
pub(super) fn json_response(status: StatusCode, body: serde_json::Value) -> Response {
    (status, Json(body)).into_response()
}
