//! Concurrent resolutions against a shared registry.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::rstest;
use trunkbind::trunk_driver::{
    adapters::memory::InMemoryAgentRegistry,
    domain::{AgentRecord, AgentType, AuthorizationContext, BindingHost, InterfaceKind},
    services::{
        AgentAvailabilityChecker, DriverCatalog, DriverCatalogConfig, DriverCompatibilityResolver,
    },
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn parallel_resolutions_agree_on_a_stable_registry() {
    let registry = Arc::new(InMemoryAgentRegistry::new());
    registry
        .register(AgentRecord::new(
            BindingHost::new("h1").expect("valid host"),
            AgentType::open_vswitch(),
            &DefaultClock,
        ))
        .expect("registration should succeed");
    let resolver = Arc::new(DriverCompatibilityResolver::new(
        AgentAvailabilityChecker::new(registry),
    ));
    let catalog = Arc::new(
        DriverCatalog::from_config(DriverCatalogConfig::builtin())
            .expect("builtin config is valid"),
    );

    let mut handles = Vec::new();
    for host_name in ["h1", "h2"].into_iter().cycle().take(16) {
        let task_resolver = Arc::clone(&resolver);
        let task_catalog = Arc::clone(&catalog);
        handles.push(tokio::spawn(async move {
            let owner = task_resolver
                .resolve_owner(
                    &AuthorizationContext::admin(),
                    &task_catalog,
                    &InterfaceKind::Ovs,
                    &BindingHost::new(host_name).expect("valid host"),
                )
                .await
                .expect("an owner should exist");
            (host_name, owner.name().as_str().to_owned())
        }));
    }

    for handle in handles {
        let (host_name, owner) = handle.await.expect("task should complete");
        let expected = if host_name == "h1" { "openvswitch" } else { "ovn" };
        assert_eq!(owner, expected);
    }
}
