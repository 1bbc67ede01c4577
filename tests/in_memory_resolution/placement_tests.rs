//! Ownership tracks agents registering and leaving a host.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use trunkbind::trunk_driver::{
    adapters::memory::{InMemoryAgentRegistry, InMemoryCorePlugin},
    domain::{
        AgentRecord, AgentType, AuthorizationContext, BindingHost, DriverDescriptor,
        InterfaceKind,
    },
    services::{
        AgentAvailabilityChecker, DriverCatalog, DriverCatalogConfig, DriverCompatibilityResolver,
    },
};

struct Deployment {
    registry: Arc<InMemoryAgentRegistry>,
    resolver: DriverCompatibilityResolver<InMemoryAgentRegistry>,
    catalog: DriverCatalog,
}

#[fixture]
fn deployment() -> Deployment {
    let registry = Arc::new(InMemoryAgentRegistry::new());
    let plugin = InMemoryCorePlugin::with_agents(Arc::clone(&registry));
    Deployment {
        resolver: DriverCompatibilityResolver::new(AgentAvailabilityChecker::from_plugin(&plugin)),
        catalog: DriverCatalog::from_config(DriverCatalogConfig::builtin())
            .expect("builtin config is valid"),
        registry,
    }
}

fn host(name: &str) -> BindingHost {
    BindingHost::new(name).expect("valid host")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn answers_reflect_the_registry_at_call_time(deployment: Deployment) {
    let context = AuthorizationContext::for_user("alice", "tenant_a");
    let driver = DriverDescriptor::openvswitch();
    let agent = AgentRecord::new(host("h1"), AgentType::open_vswitch(), &DefaultClock);
    let agent_id = agent.id();

    let before = deployment
        .resolver
        .is_driver_compatible(&context, &driver, &InterfaceKind::Ovs, &host("h1"))
        .await
        .expect("resolution should succeed");
    deployment
        .registry
        .register(agent)
        .expect("registration should succeed");
    let registered = deployment
        .resolver
        .is_driver_compatible(&context, &driver, &InterfaceKind::Ovs, &host("h1"))
        .await
        .expect("resolution should succeed");
    deployment
        .registry
        .deregister(agent_id)
        .expect("deregistration should succeed");
    let after = deployment
        .resolver
        .is_driver_compatible(&context, &driver, &InterfaceKind::Ovs, &host("h1"))
        .await
        .expect("resolution should succeed");

    assert!(!before);
    assert!(registered);
    assert!(!after);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn linux_bridge_host_owns_bridge_ports(deployment: Deployment) {
    deployment
        .registry
        .register(AgentRecord::new(
            host("net-2"),
            AgentType::linux_bridge(),
            &DefaultClock,
        ))
        .expect("registration should succeed");

    let owner = deployment
        .resolver
        .resolve_owner(
            &AuthorizationContext::admin(),
            &deployment.catalog,
            &InterfaceKind::Bridge,
            &host("net-2"),
        )
        .await
        .expect("an owner should exist");

    assert_eq!(owner.name().as_str(), "linuxbridge");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn agent_of_another_driver_does_not_grant_ownership(deployment: Deployment) {
    deployment
        .registry
        .register(AgentRecord::new(
            host("h1"),
            AgentType::linux_bridge(),
            &DefaultClock,
        ))
        .expect("registration should succeed");

    let owns = deployment
        .resolver
        .is_driver_compatible(
            &AuthorizationContext::admin(),
            &DriverDescriptor::openvswitch(),
            &InterfaceKind::Ovs,
            &host("h1"),
        )
        .await
        .expect("resolution should succeed");

    assert!(!owns);
}
