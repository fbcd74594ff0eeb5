//! Aggregate figures for a sequenced route.

use serde::Serialize;

use crate::config::PlannerConfig;
use crate::constraints::RouteAggregates;
use crate::haversine::travel_minutes;
use crate::model::{Coordinate, Stop};
use crate::polyline::Polyline;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteStats {
    /// Depot → first stop, consecutive legs, last stop → depot.
    pub total_distance_km: f64,
    /// Driving time at the configured average speed plus service time.
    pub total_duration_minutes: f64,
    pub fuel_cost_estimate: f64,
}

impl RouteStats {
    pub fn aggregates(&self, stop_count: usize) -> RouteAggregates {
        RouteAggregates {
            total_distance_km: self.total_distance_km,
            total_duration_minutes: self.total_duration_minutes,
            stop_count,
        }
    }
}

/// Statistics for stops visited in slice order, using default settings.
pub fn calculate_route_stats(stops: &[Stop], depot: Coordinate) -> RouteStats {
    calculate_route_stats_with(stops, depot, &PlannerConfig::default())
}

pub fn calculate_route_stats_with(
    stops: &[Stop],
    depot: Coordinate,
    config: &PlannerConfig,
) -> RouteStats {
    let total_distance_km = Polyline::for_route(depot, stops).length_km();
    let service_minutes: f64 = stops
        .iter()
        .filter(|stop| stop.valid_location().is_some())
        .map(|stop| f64::from(stop.service_minutes()))
        .sum();

    RouteStats {
        total_distance_km,
        total_duration_minutes: travel_minutes(total_distance_km, config.average_speed_kmh)
            + service_minutes,
        fuel_cost_estimate: total_distance_km * config.fuel_rate_per_km,
    }
}
