//! Adapter implementations for the agent registry and core plugin ports.

pub mod memory;
