//! Dense distance matrix.

use crate::error::PlannerError;
use crate::haversine::HaversineMatrix;
use crate::model::Coordinate;
use crate::traits::DistanceMatrixProvider;

/// A dense n×n distance table in kilometres, stored row-major.
///
/// By convention index 0 is the depot when the matrix covers a whole route.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Haversine distances between every pair of points.
    pub fn build(points: &[Coordinate]) -> Self {
        HaversineMatrix.matrix_for(points)
    }

    /// Creates a matrix from an explicit row-major grid.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self, PlannerError> {
        let expected = size * size;
        if data.len() != expected {
            return Err(PlannerError::MatrixDimension {
                size,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { data, size })
    }

    /// Wraps a buffer already known to hold `size * size` entries.
    pub(crate) fn from_row_major(size: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), size * size);
        Self { data, size }
    }

    /// Distance from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Distance from `from` to `to` when the entry exists and is finite.
    pub fn distance(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.size || to >= self.size {
            return None;
        }
        Some(self.get(from, to)).filter(|km| km.is_finite())
    }

    pub fn set(&mut self, from: usize, to: usize, km: f64) {
        self.data[from * self.size + to] = km;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
