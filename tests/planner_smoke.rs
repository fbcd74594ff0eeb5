//! End-to-end planning over real Paris delivery locations.

mod fixtures;

use fleet_planner::config::PlannerConfig;
use fleet_planner::model::seconds_from_midnight;
use fleet_planner::planner::{PlanRequest, RoutePlanner};
use fleet_planner::{
    Driver, LicenseType, PlannerError, Priority, RouteConstraints, Stop, StopRequirements,
    Vehicle, VehicleCategory,
};

use fixtures::{DELIVERIES, delivery_stops, depot, suburban_stops};

fn fleet() -> Vec<Vehicle> {
    vec![
        Vehicle::new("van-1", "GA-101-AA", VehicleCategory::Van).with_make("Renault", "Trafic"),
        Vehicle::new("van-2", "GA-102-AA", VehicleCategory::Van)
            .with_make("Renault", "Master")
            .with_refrigeration(),
        Vehicle::new("truck-1", "GB-201-BB", VehicleCategory::LightTruck)
            .with_make("Iveco", "Daily")
            .with_refrigeration()
            .with_liftgate(),
    ]
}

fn crew() -> Vec<Driver> {
    vec![
        Driver::new("d-1", "Alex Martin", LicenseType::B),
        Driver::new("d-2", "Sam Bernard", LicenseType::C1).with_professional_card(),
    ]
}

#[test]
fn plans_city_round() {
    let stops = delivery_stops();
    let vehicles = fleet();
    let drivers = crew();
    let constraints = RouteConstraints::default();

    let plan = RoutePlanner::default()
        .plan(PlanRequest {
            depot: depot(),
            stops: &stops,
            constraints: &constraints,
            vehicles: &vehicles,
            drivers: &drivers,
        })
        .expect("valid request");

    assert_eq!(plan.stops.len(), DELIVERIES.len());
    assert_eq!(plan.geometry.points().len(), DELIVERIES.len() + 2);
    assert!((plan.geometry.length_km() - plan.stats.total_distance_km).abs() < 1e-9);
    assert!(plan.stats.total_distance_km > 20.0 && plan.stats.total_distance_km < 120.0);
    assert!(plan.violations.is_empty(), "unexpected violations: {:?}", plan.violations);
    assert!(plan.is_feasible());

    let best = plan.assignment.as_ref().expect("an assignment");
    assert_eq!(best.vehicle.id, "van-1");
    assert_eq!(best.driver.id, "d-1");
    assert!(plan.alternatives.len() <= 3);
}

#[test]
fn refrigerated_liftgate_route_picks_equipped_truck() {
    let mut stops = delivery_stops();
    stops[0].requirements = StopRequirements {
        requires_liftgate: true,
        requires_professional_card: true,
        ..StopRequirements::default()
    };
    let vehicles = fleet();
    let drivers = crew();
    let constraints = RouteConstraints {
        require_refrigeration: true,
        ..RouteConstraints::default()
    };

    let plan = RoutePlanner::default()
        .plan(PlanRequest {
            depot: depot(),
            stops: &stops,
            constraints: &constraints,
            vehicles: &vehicles,
            drivers: &drivers,
        })
        .expect("valid request");

    let best = plan.assignment.expect("an assignment");
    assert_eq!(best.vehicle.id, "truck-1");
    assert_eq!(best.driver.id, "d-2");
    assert!(best.warnings.is_empty());
}

#[test]
fn reports_limit_violations_and_late_stops() {
    let mut stops = delivery_stops();
    stops.extend(suburban_stops());
    for stop in &mut stops {
        stop.service_minutes = Some(45);
    }
    // Every stop must be done by 08:30, which 45 minutes of service from 08:00 misses.
    let stops: Vec<Stop> = stops
        .into_iter()
        .map(|stop| stop.with_window(seconds_from_midnight(8, 0), seconds_from_midnight(8, 30)))
        .collect();
    let constraints = RouteConstraints {
        max_distance_km: 20.0,
        max_stops: 10,
        ..RouteConstraints::default()
    };

    let plan = RoutePlanner::default()
        .plan(PlanRequest {
            depot: depot(),
            stops: &stops,
            constraints: &constraints,
            vehicles: &[],
            drivers: &[],
        })
        .expect("valid request");

    assert!(!plan.is_feasible());
    assert!(plan.violations.iter().any(|v| v.starts_with("Total distance")));
    assert!(plan.violations.iter().any(|v| v.starts_with("Route has 17 stops")));
    assert!(plan.violations.iter().any(|v| v.starts_with("Total duration")));
    assert!(!plan.schedule.is_feasible());
    assert_eq!(plan.warnings.len(), 1);
    assert!(plan.assignment.is_none());
    assert!(plan.alternatives.is_empty());
}

#[test]
fn long_day_warns_about_end_of_day() {
    let stops: Vec<Stop> = delivery_stops()
        .into_iter()
        .map(|stop| stop.with_service_minutes(60))
        .collect();
    let constraints = RouteConstraints {
        max_duration_minutes: 2000,
        ..RouteConstraints::default()
    };

    let plan = RoutePlanner::default()
        .plan(PlanRequest {
            depot: depot(),
            stops: &stops,
            constraints: &constraints,
            vehicles: &[],
            drivers: &[],
        })
        .expect("valid request");

    assert!(plan.schedule.is_feasible());
    assert_eq!(plan.warnings.len(), 1);
    assert!(plan.warnings[0].contains("after the end of day 18:00"));
}

#[test]
fn rejects_negative_weights() {
    let constraints = RouteConstraints {
        distance_weight: -1.0,
        ..RouteConstraints::default()
    };

    let result = RoutePlanner::new(PlannerConfig::default())
        .expect("default config is valid")
        .plan(PlanRequest {
            depot: depot(),
            stops: &[],
            constraints: &constraints,
            vehicles: &[],
            drivers: &[],
        });

    assert!(matches!(result, Err(PlannerError::InvalidWeight { name: "distance_weight", .. })));
}

/// Visiting order, stop priorities and best total score of a planned route.
fn plan_summary(stops: &[Stop]) -> (Vec<String>, Vec<Priority>, Option<f64>) {
    let vehicles = fleet();
    let drivers = crew();
    let constraints = RouteConstraints::default();

    let plan = RoutePlanner::default()
        .plan(PlanRequest {
            depot: depot(),
            stops,
            constraints: &constraints,
            vehicles: &vehicles,
            drivers: &drivers,
        })
        .expect("valid request");

    (
        plan.stops.iter().map(|stop| stop.id.clone()).collect(),
        plan.stops.iter().map(|stop| stop.priority).collect(),
        plan.assignment.map(|a| a.total_score),
    )
}

#[test]
fn stop_priority_is_carried_but_not_scored() {
    let urgent: Vec<Stop> = delivery_stops()
        .into_iter()
        .map(|stop| stop.with_priority(Priority::High))
        .collect();

    let (baseline_ids, _, baseline_score) = plan_summary(&delivery_stops());
    let (ids, priorities, score) = plan_summary(&urgent);

    assert!(priorities.iter().all(|priority| *priority == Priority::High));
    assert_eq!(ids, baseline_ids);
    assert_eq!(score, baseline_score);
}

#[test]
fn huge_service_times_plan_without_overflow() {
    let mut stops = delivery_stops();
    stops[0].service_minutes = Some(u32::MAX);
    stops[1].service_minutes = Some(1);
    let constraints = RouteConstraints::default();

    let plan = RoutePlanner::default()
        .plan(PlanRequest {
            depot: depot(),
            stops: &stops,
            constraints: &constraints,
            vehicles: &[],
            drivers: &[],
        })
        .expect("valid request");

    assert!(plan.stats.total_duration_minutes > f64::from(u32::MAX));
    assert!(plan.violations.iter().any(|v| v.starts_with("Total duration")));
}
