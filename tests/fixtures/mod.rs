//! Test fixtures for drain-router.
//!
//! Provides real Gangnam-district storm-drain sites and helpers to build
//! task lists plus their device/location lookup.

pub mod gangnam_locations;

pub use gangnam_locations::*;
