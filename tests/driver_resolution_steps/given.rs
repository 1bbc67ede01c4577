//! Given steps for driver resolution BDD scenarios.

use super::world::ResolutionWorld;
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use trunkbind::trunk_driver::{
    domain::{AgentRecord, AgentType, BindingHost},
    services::{DriverCatalog, DriverCatalogConfig},
};

#[given("the builtin trunk drivers are configured")]
fn builtin_drivers(world: &mut ResolutionWorld) -> Result<(), eyre::Report> {
    world.catalog = DriverCatalog::from_config(DriverCatalogConfig::builtin())
        .wrap_err("build builtin driver catalog")?;
    Ok(())
}

#[given(r#"an "{agent_type}" agent runs on host "{host}""#)]
fn agent_runs_on_host(
    world: &mut ResolutionWorld,
    agent_type: String,
    host: String,
) -> Result<(), eyre::Report> {
    let record = AgentRecord::new(
        BindingHost::new(host)?,
        AgentType::new(agent_type)?,
        &DefaultClock,
    );
    world
        .registry
        .register(record)
        .wrap_err("register scenario agent")?;
    Ok(())
}

#[given("the core plugin does not support the agent extension")]
fn no_agent_extension(world: &mut ResolutionWorld) {
    world.agent_extension = false;
}

#[given("the agent registry is unreachable")]
fn registry_unreachable(world: &mut ResolutionWorld) -> Result<(), eyre::Report> {
    world
        .registry
        .set_unreachable(true)
        .wrap_err("make registry unreachable")?;
    Ok(())
}
