//! Great-circle distances.
//!
//! Straight-line distance on a spherical Earth. Ignores the road network,
//! which is accurate enough for ordering stops a few tens of kilometres
//! apart.

use rayon::prelude::*;

use crate::matrix::DistanceMatrix;
use crate::model::Coordinate;
use crate::traits::DistanceMatrixProvider;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points in kilometers.
pub fn distance_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}

/// Convert a distance in km to travel minutes at the given speed.
pub fn travel_minutes(km: f64, speed_kmh: f64) -> f64 {
    km / speed_kmh * 60.0
}

/// Haversine-based distance matrix provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineMatrix;

impl DistanceMatrixProvider for HaversineMatrix {
    fn matrix_for(&self, locations: &[Coordinate]) -> DistanceMatrix {
        let n = locations.len();
        let mut data = vec![0.0; n * n];
        if n > 0 {
            data.par_chunks_mut(n).enumerate().for_each(|(i, row)| {
                for (j, to) in locations.iter().enumerate() {
                    if i != j {
                        row[j] = distance_km(locations[i], *to);
                    }
                }
            });
        }
        DistanceMatrix::from_row_major(n, data)
    }
}
