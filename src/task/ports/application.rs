//! Read-only lookup port for applications that own tasks.

use crate::task::domain::{Application, ApplicationId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for application lookups.
pub type ApplicationDirectoryResult<T> = Result<T, ApplicationDirectoryError>;

/// Application lookup contract.
#[async_trait]
pub trait ApplicationDirectory: Send + Sync {
    /// Finds an application by identifier.
    ///
    /// Returns `None` when no application has the identifier.
    async fn find_by_id(&self, id: &ApplicationId)
    -> ApplicationDirectoryResult<Option<Application>>;
}

/// Errors returned by application directory implementations.
#[derive(Debug, Clone, Error)]
pub enum ApplicationDirectoryError {
    /// Persistence-layer failure.
    #[error("application directory failure: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ApplicationDirectoryError {
    /// Wraps an adapter error as [`ApplicationDirectoryError::Persistence`].
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
