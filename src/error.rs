//! Error type for caller contract violations.
//!
//! Infeasible routes and poor assignments are results, not errors. This
//! type only covers inputs a caller should have rejected before calling in.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlannerError {
    #[error("coordinate ({lat}, {lng}) is not a finite WGS84 position")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("{name} must be a finite, non-negative weight, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("{name} must be finite and positive, got {value}")]
    InvalidConfig { name: &'static str, value: f64 },

    #[error("distance matrix of size {size} needs {expected} entries, got {actual}")]
    MatrixDimension {
        size: usize,
        expected: usize,
        actual: usize,
    },
}
