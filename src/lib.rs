//! fleet-planner core
//!
//! Route sequencing and vehicle/driver assignment for fleet operations.
//! Everything here is pure computation: callers pass typed stops, vehicles
//! and drivers in and get ordered routes, statistics and ranked assignments
//! back.

pub mod error;
pub mod config;
pub mod model;
pub mod traits;
pub mod haversine;
pub mod matrix;
pub mod sequencer;
pub mod polyline;
pub mod stats;
pub mod feasibility;
pub mod constraints;
pub mod scoring;
pub mod assignment;
pub mod planner;

pub use error::PlannerError;
pub use config::PlannerConfig;
pub use model::{
    Assignment, Coordinate, Driver, Equipment, LicenseType, Priority, RouteConstraints, Stop,
    StopRequirements, TimeWindow, Vehicle, VehicleCategory,
};
