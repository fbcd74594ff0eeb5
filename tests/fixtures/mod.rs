//! Test fixtures for fleet-planner.
//!
//! Provides real Paris-area delivery locations and a depot at the Rungis
//! wholesale market.

pub mod paris_locations;

pub use paris_locations::*;
