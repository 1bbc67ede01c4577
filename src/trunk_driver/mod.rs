//! Trunk driver ownership resolution.
//!
//! Several trunk drivers can claim the same virtual interface type (OVS and
//! OVN both bind `ovs` ports, for instance), so interface compatibility alone
//! does not identify the driver in charge of a bound port. This module
//! decides ownership by combining a driver's interface predicate with the
//! presence of its companion agent on the binding host. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Resolution services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
