//! Seams between the planner and its distance source.

use crate::matrix::DistanceMatrix;
use crate::model::Coordinate;

/// Provides a distance matrix (kilometres) for a set of locations.
///
/// The matrix is indexed by the provided location order. Entries that are
/// unknown should be non-finite; the sequencer treats them as unreachable.
/// Sequencing assumes the matrix is symmetric.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, locations: &[Coordinate]) -> DistanceMatrix;
}
