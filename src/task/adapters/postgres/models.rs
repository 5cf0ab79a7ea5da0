//! Diesel row models for application and task persistence.

use super::schema::{applications, tasks};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for application records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = applications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ApplicationRow {
    /// Application identifier.
    pub id: uuid::Uuid,
    /// Owning tenant.
    pub tenant_id: uuid::Uuid,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning application.
    pub application_id: uuid::Uuid,
    /// Tenant copied from the application.
    pub tenant_id: uuid::Uuid,
    /// Task kind.
    pub kind: String,
    /// Due timestamp.
    pub due_at: DateTime<Utc>,
    /// Lifecycle status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning application.
    pub application_id: uuid::Uuid,
    /// Tenant copied from the application.
    pub tenant_id: uuid::Uuid,
    /// Task kind.
    pub kind: String,
    /// Due timestamp.
    pub due_at: DateTime<Utc>,
    /// Lifecycle status.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
