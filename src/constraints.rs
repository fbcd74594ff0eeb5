//! Route-level limit checks.
//!
//! Equipment requirements are vehicle attributes and are checked by the
//! assignment scorer, not here.

use serde::{Deserialize, Serialize};

use crate::model::RouteConstraints;

/// Computed totals for a sequenced route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteAggregates {
    pub total_distance_km: f64,
    pub total_duration_minutes: f64,
    pub stop_count: usize,
}

/// Human-readable violations, in a fixed order: distance, duration, stops.
/// An empty list means the route is within limits.
pub fn validate_constraints(aggregates: &RouteAggregates, constraints: &RouteConstraints) -> Vec<String> {
    let mut violations = Vec::new();

    if aggregates.total_distance_km > constraints.max_distance_km {
        violations.push(format!(
            "Total distance {:.1} km exceeds maximum of {:.1} km",
            aggregates.total_distance_km, constraints.max_distance_km
        ));
    }

    if aggregates.total_duration_minutes > f64::from(constraints.max_duration_minutes) {
        violations.push(format!(
            "Total duration {:.0} min exceeds maximum of {} min",
            aggregates.total_duration_minutes, constraints.max_duration_minutes
        ));
    }

    if aggregates.stop_count > constraints.max_stops {
        violations.push(format!(
            "Route has {} stops, maximum is {}",
            aggregates.stop_count, constraints.max_stops
        ));
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregates(km: f64, minutes: f64, stops: usize) -> RouteAggregates {
        RouteAggregates {
            total_distance_km: km,
            total_duration_minutes: minutes,
            stop_count: stops,
        }
    }

    #[test]
    fn test_within_limits() {
        let violations = validate_constraints(&aggregates(100.0, 300.0, 10), &RouteConstraints::default());
        assert!(violations.is_empty());
    }

    #[test]
    fn test_limits_are_inclusive() {
        let constraints = RouteConstraints::default();
        let at_limit = aggregates(
            constraints.max_distance_km,
            f64::from(constraints.max_duration_minutes),
            constraints.max_stops,
        );
        assert!(validate_constraints(&at_limit, &constraints).is_empty());
    }

    #[test]
    fn test_reports_all_violations_in_order() {
        let constraints = RouteConstraints {
            max_distance_km: 50.0,
            max_duration_minutes: 120,
            max_stops: 3,
            ..RouteConstraints::default()
        };
        let violations = validate_constraints(&aggregates(75.5, 180.0, 5), &constraints);
        assert_eq!(
            violations,
            vec![
                "Total distance 75.5 km exceeds maximum of 50.0 km".to_string(),
                "Total duration 180 min exceeds maximum of 120 min".to_string(),
                "Route has 5 stops, maximum is 3".to_string(),
            ]
        );
    }
}
