//! When steps for driver resolution BDD scenarios.

use super::world::{ResolutionWorld, parse_binding, run_async};
use rstest_bdd_macros::when;
use trunkbind::trunk_driver::domain::DriverName;

#[when(r#"driver "{driver}" is evaluated for an "{interface}" port on host "{host}""#)]
fn evaluate_driver(
    world: &mut ResolutionWorld,
    driver: String,
    interface: String,
    host: String,
) -> Result<(), eyre::Report> {
    let (kind, binding_host) = parse_binding(&interface, &host)?;
    let name = DriverName::new(driver)?;
    let candidate = world
        .catalog
        .get(&name)
        .cloned()
        .ok_or_else(|| eyre::eyre!("driver '{name}' is not configured"))?;
    let resolver = world.resolver();
    world.last_verdict = Some(run_async(resolver.is_driver_compatible(
        &world.context,
        candidate.as_ref(),
        &kind,
        &binding_host,
    )));
    Ok(())
}

#[when(r#"the owner of an "{interface}" port on host "{host}" is resolved"#)]
fn resolve_owner(
    world: &mut ResolutionWorld,
    interface: String,
    host: String,
) -> Result<(), eyre::Report> {
    resolve_into_world(world, &interface, &host)
}

#[when(r#"the owner of a "{interface}" port on host "{host}" is resolved"#)]
fn resolve_owner_consonant(
    world: &mut ResolutionWorld,
    interface: String,
    host: String,
) -> Result<(), eyre::Report> {
    resolve_into_world(world, &interface, &host)
}

fn resolve_into_world(
    world: &mut ResolutionWorld,
    interface: &str,
    host: &str,
) -> Result<(), eyre::Report> {
    let (kind, binding_host) = parse_binding(interface, host)?;
    let resolver = world.resolver();
    world.last_owner = Some(run_async(resolver.resolve_owner(
        &world.context,
        &world.catalog,
        &kind,
        &binding_host,
    )));
    Ok(())
}
