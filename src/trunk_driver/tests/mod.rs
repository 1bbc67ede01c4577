//! Unit tests for the trunk driver module.
