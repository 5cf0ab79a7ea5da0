//! Given steps for task creation BDD scenarios.

use super::world::TaskCreationWorld;
use lynkdesk::task::domain::{Application, ApplicationId, TenantId};
use rstest_bdd_macros::given;

#[given(r#"an application "{application_id}" owned by tenant "{tenant_id}""#)]
fn application_exists(
    world: &mut TaskCreationWorld,
    application_id: String,
    tenant_id: String,
) -> Result<(), eyre::Report> {
    world.applications.insert(Application::new(
        ApplicationId::new(application_id),
        TenantId::new(tenant_id),
    ))?;
    Ok(())
}
