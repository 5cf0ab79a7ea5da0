//! In-memory application directory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Application, ApplicationId},
    ports::{ApplicationDirectory, ApplicationDirectoryError, ApplicationDirectoryResult},
};

/// Thread-safe in-memory application directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryApplicationDirectory {
    applications: Arc<RwLock<HashMap<ApplicationId, Application>>>,
}

impl InMemoryApplicationDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an application.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationDirectoryError::Persistence`] when the internal
    /// lock is poisoned.
    pub fn insert(&self, application: Application) -> ApplicationDirectoryResult<()> {
        let mut applications = self.applications.write().map_err(|err| {
            ApplicationDirectoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        applications.insert(application.id().clone(), application);
        Ok(())
    }
}

#[async_trait]
impl ApplicationDirectory for InMemoryApplicationDirectory {
    async fn find_by_id(
        &self,
        id: &ApplicationId,
    ) -> ApplicationDirectoryResult<Option<Application>> {
        let applications = self.applications.read().map_err(|err| {
            ApplicationDirectoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(applications.get(id).cloned())
    }
}
