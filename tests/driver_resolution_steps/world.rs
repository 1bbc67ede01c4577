//! Shared world state for driver resolution BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use trunkbind::trunk_driver::{
    adapters::memory::{InMemoryAgentRegistry, InMemoryCorePlugin},
    domain::{AuthorizationContext, BindingHost, InterfaceKind},
    ports::{AgentRegistryError, TrunkDriver},
    services::{
        AgentAvailabilityChecker, DriverCatalog, DriverCompatibilityResolver,
        DriverResolutionResult,
    },
};

/// Resolver type used by the BDD world.
pub type TestResolver = DriverCompatibilityResolver<InMemoryAgentRegistry>;

/// Scenario world for driver resolution behaviour tests.
pub struct ResolutionWorld {
    /// Agent registry shared with the core plugin.
    pub registry: Arc<InMemoryAgentRegistry>,
    /// Whether the core plugin advertises the agent extension.
    pub agent_extension: bool,
    /// Configured trunk drivers.
    pub catalog: DriverCatalog,
    /// Caller context used for every evaluation.
    pub context: AuthorizationContext,
    /// Result of the last single-driver evaluation.
    pub last_verdict: Option<Result<bool, AgentRegistryError>>,
    /// Result of the last owner resolution.
    pub last_owner: Option<DriverResolutionResult<Arc<dyn TrunkDriver>>>,
}

impl ResolutionWorld {
    /// Creates a world with an empty registry and no drivers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: Arc::new(InMemoryAgentRegistry::new()),
            agent_extension: true,
            catalog: DriverCatalog::new(),
            context: AuthorizationContext::for_user("scenario", "tenant"),
            last_verdict: None,
            last_owner: None,
        }
    }

    /// Composes a resolver from the current plugin configuration.
    pub fn resolver(&self) -> TestResolver {
        let checker = if self.agent_extension {
            AgentAvailabilityChecker::from_plugin(&InMemoryCorePlugin::with_agents(Arc::clone(
                &self.registry,
            )))
        } else {
            AgentAvailabilityChecker::from_plugin(&InMemoryCorePlugin::without_agents())
        };
        DriverCompatibilityResolver::new(checker)
    }
}

impl Default for ResolutionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ResolutionWorld {
    ResolutionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses the interface kind and host named in a step.
pub fn parse_binding(
    interface: &str,
    host: &str,
) -> Result<(InterfaceKind, BindingHost), eyre::Report> {
    let kind = InterfaceKind::new(interface)?;
    let binding_host = BindingHost::new(host)?;
    Ok((kind, binding_host))
}
