//! Time-window feasibility simulation.
//!
//! Walks a sequenced route with a virtual clock. Travel between stops is a
//! fixed allowance (`inter_stop_travel_minutes`), not derived from distance;
//! the clock only needs to be good enough to catch clearly late stops.

use serde::Serialize;

use crate::config::PlannerConfig;
use crate::model::Stop;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledVisit {
    pub stop_id: String,
    /// All times are seconds from midnight.
    pub arrival: i32,
    pub service_start: i32,
    pub departure: i32,
}

/// A stop whose service could not be completed inside its window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowViolation {
    pub stop_id: String,
    pub window_end: i32,
    pub completed_at: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleOutcome {
    /// Visits up to and including the first violating stop.
    pub visits: Vec<ScheduledVisit>,
    /// Clock value when the simulation stopped.
    pub finish: i32,
    pub violation: Option<WindowViolation>,
}

impl ScheduleOutcome {
    pub fn is_feasible(&self) -> bool {
        self.violation.is_none()
    }
}

/// Simulates the route from `start`, stopping at the first stop that
/// finishes after its window end.
pub fn simulate_schedule(stops: &[Stop], start: i32, config: &PlannerConfig) -> ScheduleOutcome {
    let travel = minutes_to_seconds(config.inter_stop_travel_minutes);
    let mut clock = start;
    let mut visits = Vec::with_capacity(stops.len());

    for (position, stop) in stops.iter().enumerate() {
        if position > 0 {
            clock = clock.saturating_add(travel);
        }
        let arrival = clock;

        let window = stop.time_window.unwrap_or_default();
        if let Some(window_start) = window.start {
            clock = clock.max(window_start);
        }
        let service_start = clock;
        clock = clock.saturating_add(minutes_to_seconds(stop.service_minutes()));

        visits.push(ScheduledVisit {
            stop_id: stop.id.clone(),
            arrival,
            service_start,
            departure: clock,
        });

        if let Some(window_end) = window.end {
            if clock > window_end {
                return ScheduleOutcome {
                    visits,
                    finish: clock,
                    violation: Some(WindowViolation {
                        stop_id: stop.id.clone(),
                        window_end,
                        completed_at: clock,
                    }),
                };
            }
        }
    }

    ScheduleOutcome {
        visits,
        finish: clock,
        violation: None,
    }
}

/// True when every stop can be served inside its window, with the clock
/// starting at `config.schedule_start`.
pub fn is_time_window_feasible(stops: &[Stop], config: &PlannerConfig) -> bool {
    simulate_schedule(stops, config.schedule_start, config).is_feasible()
}

fn minutes_to_seconds(minutes: u32) -> i32 {
    i32::try_from(minutes).unwrap_or(i32::MAX).saturating_mul(60)
}

/// Latest clock value [`format_clock`] renders, 99:59.
const MAX_CLOCK: i32 = 99 * 3600 + 59 * 60;

/// Formats seconds from midnight as `HH:MM`.
///
/// Hours keep counting past midnight (`26:30` is 02:30 the next day). Values
/// are clamped to `00:00..=99:59`, so a saturated clock reads `99:59`.
pub fn format_clock(seconds: i32) -> String {
    let seconds = seconds.clamp(0, MAX_CLOCK);
    format!("{:02}:{:02}", seconds / 3600, (seconds % 3600) / 60)
}
