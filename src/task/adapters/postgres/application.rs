//! `PostgreSQL` application directory.

use super::{
    blocking::{TaskPgPool, with_connection},
    models::ApplicationRow,
    schema::applications,
};
use crate::task::{
    domain::{Application, ApplicationId, TenantId},
    ports::{ApplicationDirectory, ApplicationDirectoryError, ApplicationDirectoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

/// `PostgreSQL`-backed application directory.
#[derive(Debug, Clone)]
pub struct PostgresApplicationDirectory {
    pool: TaskPgPool,
}

impl PostgresApplicationDirectory {
    /// Creates a directory from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationDirectory for PostgresApplicationDirectory {
    async fn find_by_id(
        &self,
        id: &ApplicationId,
    ) -> ApplicationDirectoryResult<Option<Application>> {
        // Identifiers that are not UUIDs cannot exist in the table.
        let Ok(uuid) = Uuid::parse_str(id.as_str()) else {
            return Ok(None);
        };
        let lookup_id = id.clone();

        with_connection(
            &self.pool,
            move |connection| {
                let row = applications::table
                    .filter(applications::id.eq(uuid))
                    .select(ApplicationRow::as_select())
                    .first::<ApplicationRow>(connection)
                    .optional()
                    .map_err(ApplicationDirectoryError::persistence)?;
                Ok(row.map(|found| {
                    Application::new(lookup_id, TenantId::new(found.tenant_id.to_string()))
                }))
            },
            ApplicationDirectoryError::persistence,
            ApplicationDirectoryError::persistence,
        )
        .await
    }
}
