//! Domain model for trunk driver ownership resolution.
//!
//! The domain describes port bindings (interface kind and binding host),
//! the agents that may run on a host, and the capability descriptors of
//! configured trunk drivers. All infrastructure concerns are kept outside
//! the domain boundary.

mod agent;
mod bridge;
mod compatibility;
mod context;
mod descriptor;
mod error;
mod host;
mod interface;

pub use agent::{AgentId, AgentRecord, AgentType};
pub use bridge::{DEVICE_NAME_MAX_LEN, TRUNK_BRIDGE_PREFIX, TrunkBridgeName, TrunkId};
pub use compatibility::Compatibility;
pub use context::AuthorizationContext;
pub use descriptor::{DriverDescriptor, DriverName};
pub use error::TrunkDomainError;
pub use host::BindingHost;
pub use interface::{InterfaceKind, OtherInterfaceKind};
