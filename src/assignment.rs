//! Assignment search over every vehicle × driver pairing.
//!
//! Pairings are evaluated in vehicle-major input order; every tie is broken
//! in favour of the pairing seen first.

use std::cmp::Ordering;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::config::PlannerConfig;
use crate::model::{Assignment, Driver, RouteConstraints, StopRequirements, Vehicle};
use crate::scoring::score_assignment;

/// Best pairing plus ranked fallbacks for an operator to choose from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentRanking<'a> {
    pub best: Option<Assignment<'a>>,
    pub alternatives: Vec<Assignment<'a>>,
}

/// Scores the full cross product, vehicle-major, in input order.
pub fn evaluate_assignments<'a>(
    vehicles: &'a [Vehicle],
    drivers: &'a [Driver],
    constraints: &RouteConstraints,
    stop_requirements: &[StopRequirements],
    estimated_distance_km: f64,
    config: &PlannerConfig,
) -> Vec<Assignment<'a>> {
    let assignments: Vec<Assignment<'a>> = vehicles
        .par_iter()
        .flat_map_iter(move |vehicle| {
            drivers.iter().map(move |driver| {
                score_assignment(
                    vehicle,
                    driver,
                    constraints,
                    stop_requirements,
                    estimated_distance_km,
                    config,
                )
            })
        })
        .collect();

    debug!(
        vehicles = vehicles.len(),
        drivers = drivers.len(),
        evaluated = assignments.len(),
        "scored vehicle/driver pairings"
    );
    assignments
}

/// Highest scoring pairing, or `None` when either list is empty.
pub fn find_best_assignment<'a>(
    vehicles: &'a [Vehicle],
    drivers: &'a [Driver],
    constraints: &RouteConstraints,
    stop_requirements: &[StopRequirements],
    estimated_distance_km: f64,
    config: &PlannerConfig,
) -> Option<Assignment<'a>> {
    rank_assignments(
        vehicles,
        drivers,
        constraints,
        stop_requirements,
        estimated_distance_km,
        config,
    )
    .best
}

/// Up to `config.max_alternatives` runners-up scoring above
/// `config.min_alternative_score`, best first. Never includes the pairing
/// returned by [`find_best_assignment`].
pub fn rank_alternatives<'a>(
    vehicles: &'a [Vehicle],
    drivers: &'a [Driver],
    constraints: &RouteConstraints,
    stop_requirements: &[StopRequirements],
    estimated_distance_km: f64,
    config: &PlannerConfig,
) -> Vec<Assignment<'a>> {
    rank_assignments(
        vehicles,
        drivers,
        constraints,
        stop_requirements,
        estimated_distance_km,
        config,
    )
    .alternatives
}

/// Best pairing and alternatives from a single evaluation pass.
pub fn rank_assignments<'a>(
    vehicles: &'a [Vehicle],
    drivers: &'a [Driver],
    constraints: &RouteConstraints,
    stop_requirements: &[StopRequirements],
    estimated_distance_km: f64,
    config: &PlannerConfig,
) -> AssignmentRanking<'a> {
    let assignments = evaluate_assignments(
        vehicles,
        drivers,
        constraints,
        stop_requirements,
        estimated_distance_km,
        config,
    );

    let Some(best_index) = best_index(&assignments) else {
        return AssignmentRanking {
            best: None,
            alternatives: Vec::new(),
        };
    };

    let mut best = None;
    let mut alternatives = Vec::new();
    for (index, assignment) in assignments.into_iter().enumerate() {
        if index == best_index {
            best = Some(assignment);
        } else if assignment.total_score > config.min_alternative_score {
            alternatives.push(assignment);
        }
    }

    // Stable sort keeps input order among equal scores.
    alternatives.sort_by(|a, b| descending(a.total_score, b.total_score));
    alternatives.truncate(config.max_alternatives);

    AssignmentRanking { best, alternatives }
}

fn best_index(assignments: &[Assignment<'_>]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, assignment) in assignments.iter().enumerate() {
        if best.is_none_or(|(_, score)| assignment.total_score > score) {
            best = Some((index, assignment.total_score));
        }
    }
    best.map(|(index, _)| index)
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
