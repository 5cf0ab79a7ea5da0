//! Application records that own tasks.

use super::{ApplicationId, TenantId};

/// An application as seen by task creation: its identity and tenant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    id: ApplicationId,
    tenant_id: TenantId,
}

impl Application {
    /// Creates an application record.
    #[must_use]
    pub const fn new(id: ApplicationId, tenant_id: TenantId) -> Self {
        Self { id, tenant_id }
    }

    /// Returns the application identifier.
    #[must_use]
    pub const fn id(&self) -> &ApplicationId {
        &self.id
    }

    /// Returns the owning tenant.
    #[must_use]
    pub const fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }
}
