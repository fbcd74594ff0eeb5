//! End-to-end planning: sequence a route, annotate it, pick a crew.

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::assignment::{AssignmentRanking, rank_assignments};
use crate::config::PlannerConfig;
use crate::constraints::validate_constraints;
use crate::error::PlannerError;
use crate::feasibility::{ScheduleOutcome, format_clock, simulate_schedule};
use crate::haversine::HaversineMatrix;
use crate::model::{Assignment, Coordinate, Driver, RouteConstraints, Stop, StopRequirements, Vehicle};
use crate::polyline::Polyline;
use crate::sequencer::optimize_route_with;
use crate::stats::{RouteStats, calculate_route_stats_with};

/// Everything needed to plan one route.
#[derive(Debug, Clone, Copy)]
pub struct PlanRequest<'a> {
    pub depot: Coordinate,
    pub stops: &'a [Stop],
    pub constraints: &'a RouteConstraints,
    pub vehicles: &'a [Vehicle],
    pub drivers: &'a [Driver],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan<'a> {
    /// Located stops in visiting order, `order_index` set.
    pub stops: Vec<Stop>,
    pub stats: RouteStats,
    pub geometry: Polyline,
    pub schedule: ScheduleOutcome,
    /// Route limit violations (distance, duration, stop count).
    pub violations: Vec<String>,
    /// Schedule problems: late stops, finishing after the working day.
    pub warnings: Vec<String>,
    pub assignment: Option<Assignment<'a>>,
    pub alternatives: Vec<Assignment<'a>>,
}

impl RoutePlan<'_> {
    /// No limit violations and every time window met.
    pub fn is_feasible(&self) -> bool {
        self.violations.is_empty() && self.schedule.is_feasible()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoutePlanner {
    config: PlannerConfig,
}

impl RoutePlanner {
    pub fn new(config: PlannerConfig) -> Result<Self, PlannerError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Runs sequencing, statistics, schedule simulation, limit checks and
    /// assignment ranking.
    ///
    /// Fails only on caller contract violations (invalid depot or weights).
    #[instrument(skip_all, fields(stops = request.stops.len(), vehicles = request.vehicles.len(), drivers = request.drivers.len()))]
    pub fn plan<'a>(&self, request: PlanRequest<'a>) -> Result<RoutePlan<'a>, PlannerError> {
        let PlanRequest {
            depot,
            stops,
            constraints,
            vehicles,
            drivers,
        } = request;

        if !depot.is_valid() {
            return Err(PlannerError::InvalidCoordinate {
                lat: depot.lat,
                lng: depot.lng,
            });
        }
        constraints.validate()?;

        let ordered = optimize_route_with(
            stops,
            depot,
            &HaversineMatrix,
            self.config.max_improvement_passes,
        );
        let stats = calculate_route_stats_with(&ordered, depot, &self.config);
        let geometry = Polyline::for_route(depot, &ordered);
        let violations = validate_constraints(&stats.aggregates(ordered.len()), constraints);

        let schedule = simulate_schedule(&ordered, constraints.start_time, &self.config);
        let mut warnings = Vec::new();
        if let Some(violation) = &schedule.violation {
            warnings.push(format!(
                "Stop {} finishes at {}, after its window end {}",
                violation.stop_id,
                format_clock(violation.completed_at),
                format_clock(violation.window_end)
            ));
        } else if schedule.finish > constraints.end_time {
            warnings.push(format!(
                "Route finishes at {}, after the end of day {}",
                format_clock(schedule.finish),
                format_clock(constraints.end_time)
            ));
        }

        let requirements: Vec<StopRequirements> = ordered.iter().map(|stop| stop.requirements).collect();
        let AssignmentRanking { best, alternatives } = rank_assignments(
            vehicles,
            drivers,
            constraints,
            &requirements,
            stats.total_distance_km,
            &self.config,
        );

        debug!(
            violations = violations.len(),
            warnings = warnings.len(),
            alternatives = alternatives.len(),
            "route annotated"
        );
        info!(
            stops = ordered.len(),
            distance_km = stats.total_distance_km,
            assigned = best.is_some(),
            "route planned"
        );

        Ok(RoutePlan {
            stops: ordered,
            stats,
            geometry,
            schedule,
            violations,
            warnings,
            assignment: best,
            alternatives,
        })
    }
}
