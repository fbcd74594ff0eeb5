//! Route geometry.
//!
//! Straight-line geometry of a sequenced route, as decoded coordinates.
//! Encoding to a compact polyline format belongs to whoever renders the map.

use serde::{Deserialize, Serialize};

use crate::haversine::distance_km;
use crate::model::{Coordinate, Stop};

/// An ordered list of coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Closed loop depot → stops (slice order) → depot.
    ///
    /// Stops without a valid location are skipped. With no located stops the
    /// polyline is empty.
    pub fn for_route(depot: Coordinate, stops: &[Stop]) -> Self {
        let visits: Vec<Coordinate> = stops.iter().filter_map(Stop::valid_location).collect();
        if visits.is_empty() {
            return Self::new(Vec::new());
        }

        let mut points = Vec::with_capacity(visits.len() + 2);
        points.push(depot);
        points.extend(visits);
        points.push(depot);
        Self::new(points)
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of great-circle distances between consecutive points.
    pub fn length_km(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| distance_km(pair[0], pair[1]))
            .sum()
    }
}
