//! Trunkbind: trunk driver ownership resolution.
//!
//! In a network-virtualization control plane several trunk drivers can claim
//! the same virtual interface type. This crate decides which driver is
//! responsible for a bound port by combining each driver's interface support
//! with the placement of its companion agent.
//!
//! # Architecture
//!
//! Trunkbind follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory registries)
//!
//! # Modules
//!
//! - [`trunk_driver`]: Driver compatibility and owner resolution

pub mod trunk_driver;
