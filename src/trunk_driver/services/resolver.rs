//! Driver ownership resolution for port bindings.
//!
//! The same VIF type can be served by several drivers (OVS and OVN in one
//! deployment, for instance), so the interface kind alone does not identify
//! the driver in charge of a bound port. Agent-based drivers additionally
//! need one of their agents running on the binding host.
//!
//! Answers reflect the agent registry at the time of the query. Agents that
//! register or leave concurrently can change the outcome of a later call
//! with the same inputs.

use super::{AgentAvailabilityChecker, DriverCatalog};
use crate::trunk_driver::{
    domain::{AuthorizationContext, BindingHost, Compatibility, InterfaceKind},
    ports::{AgentRegistry, AgentRegistryError, AgentRegistryResult, TrunkDriver},
};
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors returned while resolving the owner of a port binding.
#[derive(Debug, Error)]
pub enum DriverResolutionError {
    /// No registered driver owns the binding.
    #[error("no compatible driver found for port binding ({interface} on host {host})")]
    NoCompatibleDriver {
        /// Interface kind of the binding.
        interface: InterfaceKind,
        /// Host the port is bound to.
        host: BindingHost,
    },
    /// The agent registry failed to answer.
    #[error(transparent)]
    Registry(#[from] AgentRegistryError),
}

/// Result type for owner resolution.
pub type DriverResolutionResult<T> = Result<T, DriverResolutionError>;

/// Decides whether a driver is the authoritative handler of a binding.
#[derive(Clone)]
pub struct DriverCompatibilityResolver<R>
where
    R: AgentRegistry,
{
    agents: AgentAvailabilityChecker<R>,
}

impl<R> DriverCompatibilityResolver<R>
where
    R: AgentRegistry,
{
    /// Creates a resolver backed by the given agent checker.
    #[must_use]
    pub const fn new(agents: AgentAvailabilityChecker<R>) -> Self {
        Self { agents }
    }

    /// Returns the agent checker used by this resolver.
    #[must_use]
    pub const fn agents(&self) -> &AgentAvailabilityChecker<R> {
        &self.agents
    }

    /// Explains whether `driver` owns a port bound with `interface` on
    /// `binding_host`.
    ///
    /// The agent registry is consulted at most once, and only for an
    /// agent-based driver that supports the interface.
    ///
    /// # Errors
    ///
    /// Propagates [`AgentRegistryError`] from the agent lookup.
    pub async fn assess<D>(
        &self,
        context: &AuthorizationContext,
        driver: &D,
        interface: &InterfaceKind,
        binding_host: &BindingHost,
    ) -> AgentRegistryResult<Compatibility>
    where
        D: TrunkDriver + ?Sized,
    {
        if !driver.is_interface_compatible(interface) {
            return Ok(Compatibility::InterfaceMismatch);
        }

        let Some(agent_type) = driver.agent_type() else {
            return Ok(Compatibility::Compatible);
        };

        let agent_types = BTreeSet::from([agent_type.clone()]);
        let present = self
            .agents
            .has_available_agent(context, &agent_types, binding_host)
            .await?;
        Ok(if present {
            Compatibility::Compatible
        } else {
            Compatibility::NoAgentOnHost
        })
    }

    /// Returns whether `driver` owns a port bound with `interface` on
    /// `binding_host`.
    ///
    /// # Errors
    ///
    /// Propagates [`AgentRegistryError`] from the agent lookup.
    pub async fn is_driver_compatible<D>(
        &self,
        context: &AuthorizationContext,
        driver: &D,
        interface: &InterfaceKind,
        binding_host: &BindingHost,
    ) -> AgentRegistryResult<bool>
    where
        D: TrunkDriver + ?Sized,
    {
        let verdict = self
            .assess(context, driver, interface, binding_host)
            .await?;
        debug!(
            driver = %driver.name(),
            %interface,
            host = %binding_host,
            %verdict,
            "assessed trunk driver"
        );
        Ok(verdict.is_compatible())
    }

    /// Returns every catalog driver that owns the binding, in registration
    /// order.
    ///
    /// Drivers are evaluated one after another; no consistency is
    /// guaranteed between their agent lookups.
    ///
    /// # Errors
    ///
    /// Propagates the first [`AgentRegistryError`] encountered.
    pub async fn compatible_drivers(
        &self,
        context: &AuthorizationContext,
        catalog: &DriverCatalog,
        interface: &InterfaceKind,
        binding_host: &BindingHost,
    ) -> AgentRegistryResult<Vec<Arc<dyn TrunkDriver>>> {
        let mut compatible = Vec::new();
        for driver in catalog.iter() {
            if self
                .is_driver_compatible(context, driver.as_ref(), interface, binding_host)
                .await?
            {
                compatible.push(Arc::clone(driver));
            }
        }
        Ok(compatible)
    }

    /// Returns the driver owning the binding.
    ///
    /// When several drivers claim the binding the first one in registration
    /// order is returned and a warning is logged.
    ///
    /// # Errors
    ///
    /// Returns [`DriverResolutionError::NoCompatibleDriver`] when no driver
    /// owns the binding, or [`DriverResolutionError::Registry`] when an agent
    /// lookup fails.
    pub async fn resolve_owner(
        &self,
        context: &AuthorizationContext,
        catalog: &DriverCatalog,
        interface: &InterfaceKind,
        binding_host: &BindingHost,
    ) -> DriverResolutionResult<Arc<dyn TrunkDriver>> {
        let compatible = self
            .compatible_drivers(context, catalog, interface, binding_host)
            .await?;

        if compatible.len() > 1 {
            let names: Vec<&str> = compatible.iter().map(|d| d.name().as_str()).collect();
            warn!(
                %interface,
                host = %binding_host,
                drivers = ?names,
                "several trunk drivers claim the same port binding"
            );
        }

        compatible
            .into_iter()
            .next()
            .ok_or_else(|| DriverResolutionError::NoCompatibleDriver {
                interface: interface.clone(),
                host: binding_host.clone(),
            })
    }
}
