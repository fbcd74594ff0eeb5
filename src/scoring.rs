//! Vehicle/driver compatibility scoring.
//!
//! Both sides start at 100 and lose fixed penalties (see
//! [`ScoringPenalties`](crate::config::ScoringPenalties)) for every failed
//! rule. Each failed rule also appends a warning, so an operator can see why
//! a pairing scored low.

use crate::config::PlannerConfig;
use crate::haversine::travel_minutes;
use crate::model::{Assignment, Driver, RouteConstraints, StopRequirements, Vehicle};

const FULL_SCORE: f64 = 100.0;

/// Scores one vehicle + driver pair for a route of `estimated_distance_km`.
///
/// Never fails; a hopeless pairing scores 0.
pub fn score_assignment<'a>(
    vehicle: &'a Vehicle,
    driver: &'a Driver,
    constraints: &RouteConstraints,
    stop_requirements: &[StopRequirements],
    estimated_distance_km: f64,
    config: &PlannerConfig,
) -> Assignment<'a> {
    let mut warnings = Vec::new();
    let vehicle_score = vehicle_score(
        vehicle,
        constraints,
        stop_requirements,
        estimated_distance_km,
        config,
        &mut warnings,
    );
    let driver_score = driver_score(vehicle, driver, stop_requirements, config, &mut warnings);

    Assignment {
        vehicle,
        driver,
        vehicle_score,
        driver_score,
        total_score: blend(vehicle_score, driver_score, constraints),
        warnings,
    }
}

fn vehicle_score(
    vehicle: &Vehicle,
    constraints: &RouteConstraints,
    stop_requirements: &[StopRequirements],
    estimated_distance_km: f64,
    config: &PlannerConfig,
    warnings: &mut Vec<String>,
) -> f64 {
    let penalties = &config.penalties;
    let mut score = FULL_SCORE;

    let needs_refrigeration = constraints.require_refrigeration
        || stop_requirements.iter().any(|req| req.requires_refrigeration);
    if needs_refrigeration && !vehicle.equipment.refrigeration {
        score -= penalties.missing_refrigeration;
        warnings.push(format!(
            "Vehicle {} has no refrigeration but the route requires it",
            vehicle.registration
        ));
    }

    let needs_liftgate =
        constraints.require_liftgate || stop_requirements.iter().any(|req| req.requires_liftgate);
    if needs_liftgate && !vehicle.equipment.liftgate {
        score -= penalties.missing_liftgate;
        warnings.push(format!(
            "Vehicle {} has no liftgate but the route requires one",
            vehicle.registration
        ));
    }

    let speed = config.effective_speed_kmh(vehicle.category);
    let drive_minutes = travel_minutes(estimated_distance_km, speed);
    if drive_minutes > f64::from(constraints.max_duration_minutes) {
        score -= penalties.duration_overrun;
        warnings.push(format!(
            "Estimated drive time {:.0} min at {:.0} km/h exceeds maximum of {} min",
            drive_minutes, speed, constraints.max_duration_minutes
        ));
    }

    if estimated_distance_km > constraints.max_distance_km {
        score -= penalties.distance_overrun;
        warnings.push(format!(
            "Estimated distance {:.1} km exceeds maximum of {:.1} km",
            estimated_distance_km, constraints.max_distance_km
        ));
    }

    score.clamp(0.0, FULL_SCORE)
}

fn driver_score(
    vehicle: &Vehicle,
    driver: &Driver,
    stop_requirements: &[StopRequirements],
    config: &PlannerConfig,
    warnings: &mut Vec<String>,
) -> f64 {
    let penalties = &config.penalties;
    let mut score = FULL_SCORE;

    let required = vehicle.category.required_license();
    if !driver.license_type.covers(required) {
        score -= penalties.license_mismatch;
        warnings.push(format!(
            "Driver {} holds a {:?} licence, vehicle {} requires {:?}",
            driver.name, driver.license_type, vehicle.registration, required
        ));
    }

    let needs_card = stop_requirements
        .iter()
        .any(|req| req.requires_professional_card);
    if needs_card && !driver.has_professional_card {
        score -= penalties.missing_professional_card;
        warnings.push(format!(
            "Driver {} has no professional qualification card required by a stop",
            driver.name
        ));
    }

    score.clamp(0.0, FULL_SCORE)
}

/// Weighted mix of the two scores. Distance and time-window weights count
/// towards the vehicle, the priority weight towards the driver. Zero total
/// weight falls back to an even split.
///
/// `priority_weight` only weights the driver score. A stop's own
/// [`Priority`](crate::model::Priority) is not read here and does not affect
/// any score.
fn blend(vehicle_score: f64, driver_score: f64, constraints: &RouteConstraints) -> f64 {
    let weight = |value: f64| if value.is_finite() { value.max(0.0) } else { 0.0 };
    let vehicle_weight = weight(constraints.distance_weight) + weight(constraints.time_window_weight);
    let driver_weight = weight(constraints.priority_weight);
    let total_weight = vehicle_weight + driver_weight;

    let total = if total_weight > 0.0 {
        (vehicle_score * vehicle_weight + driver_score * driver_weight) / total_weight
    } else {
        (vehicle_score + driver_score) / 2.0
    };
    total.clamp(0.0, FULL_SCORE)
}
