//! HTTP API built on axum.
//!
//! Routes:
//!
//! - `POST /create-task`: validate and insert a task
//! - `GET /tasks/today`: open tasks due during the current UTC day
//! - `POST /tasks/{task_id}/complete`: mark a task completed
//!
//! Every route answers `OPTIONS` with an empty 200 and any other method with
//! 405. Every response carries the permissive CORS header set.

mod auth;
mod body;
mod cors;
mod create_task;
mod dashboard;

use crate::task::{
    ports::{ApplicationDirectory, TaskRepository},
    services::{TaskCreationService, TaskDashboardService},
};
use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{MethodFilter, on, post},
};
use mockable::Clock;
use std::sync::Arc;

pub use body::TaskBody;
pub use cors::{ALLOWED_HEADERS, ALLOWED_METHODS};

/// Shared handler state: the task services and the optional bearer key.
pub struct ApiState<A, R, C>
where
    A: ApplicationDirectory,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    creation: Arc<TaskCreationService<A, R, C>>,
    dashboard: Arc<TaskDashboardService<R, C>>,
    api_key: Option<Arc<str>>,
}

impl<A, R, C> ApiState<A, R, C>
where
    A: ApplicationDirectory,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Builds the services over the given store handles and clock.
    #[must_use]
    pub fn new(applications: Arc<A>, repository: Arc<R>, clock: Arc<C>) -> Self {
        let dashboard = TaskDashboardService::new(Arc::clone(&repository), Arc::clone(&clock));
        let creation = TaskCreationService::new(applications, repository, clock);
        Self {
            creation: Arc::new(creation),
            dashboard: Arc::new(dashboard),
            api_key: None,
        }
    }

    /// Requires `Authorization: Bearer <api_key>` on every non-preflight
    /// request.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Arc::from(api_key.into()));
        self
    }
}

impl<A, R, C> Clone for ApiState<A, R, C>
where
    A: ApplicationDirectory,
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            creation: Arc::clone(&self.creation),
            dashboard: Arc::clone(&self.dashboard),
            api_key: self.api_key.clone(),
        }
    }
}

/// Builds the application router.
pub fn router<A, R, C>(state: ApiState<A, R, C>) -> Router
where
    A: ApplicationDirectory + 'static,
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let api_key = state.api_key.clone();

    Router::new()
        .route(
            "/create-task",
            post(create_task::create_task::<A, R, C>)
                .options(cors::preflight)
                .fallback(method_not_allowed),
        )
        // GET only, so HEAD reaches the 405 fallback.
        .route(
            "/tasks/today",
            on(MethodFilter::GET, dashboard::list_due_today::<A, R, C>)
                .options(cors::preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/tasks/{task_id}/complete",
            post(dashboard::complete_task::<A, R, C>)
                .options(cors::preflight)
                .fallback(method_not_allowed),
        )
        .layer(middleware::from_fn_with_state(api_key, auth::require_bearer))
        .layer(middleware::map_response(cors::apply_cors_headers))
        .with_state(state)
}

async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({ "error": "Method not allowed" })),
    )
        .into_response()
}
