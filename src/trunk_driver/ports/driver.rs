//! Driver capability contract.

use crate::trunk_driver::domain::{AgentType, DriverDescriptor, DriverName, InterfaceKind};

/// Read-only view of a trunk driver's capabilities.
pub trait TrunkDriver: Send + Sync {
    /// Returns the driver name.
    fn name(&self) -> &DriverName;

    /// Returns whether the driver can serve ports bound with `interface`.
    fn is_interface_compatible(&self, interface: &InterfaceKind) -> bool;

    /// Returns the agent type the driver relies on, or `None` when the
    /// driver is agentless.
    fn agent_type(&self) -> Option<&AgentType>;
}

impl TrunkDriver for DriverDescriptor {
    fn name(&self) -> &DriverName {
        Self::name(self)
    }

    fn is_interface_compatible(&self, interface: &InterfaceKind) -> bool {
        self.supports(interface)
    }

    fn agent_type(&self) -> Option<&AgentType> {
        Self::agent_type(self)
    }
}
