//! Planner tuning knobs.

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::model::{VehicleCategory, seconds_from_midnight};

/// Average speed assumption per vehicle category, in km/h.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategorySpeeds {
    pub car: f64,
    pub van: f64,
    pub light_truck: f64,
    pub heavy_truck: f64,
    pub articulated: f64,
}

impl Default for CategorySpeeds {
    fn default() -> Self {
        Self {
            car: 70.0,
            van: 65.0,
            light_truck: 60.0,
            heavy_truck: 55.0,
            articulated: 50.0,
        }
    }
}

impl CategorySpeeds {
    pub fn for_category(&self, category: VehicleCategory) -> f64 {
        match category {
            VehicleCategory::Car => self.car,
            VehicleCategory::Van => self.van,
            VehicleCategory::LightTruck => self.light_truck,
            VehicleCategory::HeavyTruck => self.heavy_truck,
            VehicleCategory::Articulated => self.articulated,
        }
    }
}

/// Points removed from a 100-point score when a rule fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPenalties {
    pub missing_refrigeration: f64,
    pub missing_liftgate: f64,
    pub duration_overrun: f64,
    pub distance_overrun: f64,
    pub license_mismatch: f64,
    pub missing_professional_card: f64,
}

impl Default for ScoringPenalties {
    fn default() -> Self {
        Self {
            missing_refrigeration: 50.0,
            missing_liftgate: 30.0,
            duration_overrun: 20.0,
            distance_overrun: 15.0,
            license_mismatch: 60.0,
            missing_professional_card: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Clock start for time-window simulation (seconds from midnight).
    pub schedule_start: i32,
    /// Fixed travel allowance between consecutive stops in the schedule
    /// simulation. Does not use the real inter-stop distance.
    pub inter_stop_travel_minutes: u32,
    /// Fuel cost per kilometre, in currency units.
    pub fuel_rate_per_km: f64,
    /// Speed used to turn route distance into duration statistics.
    pub average_speed_kmh: f64,
    /// Legal speed cap applied to heavy vehicle categories.
    pub heavy_vehicle_speed_cap_kmh: f64,
    pub category_speeds: CategorySpeeds,
    pub penalties: ScoringPenalties,
    /// Upper bound on 2-opt passes. `None` runs to a local optimum.
    pub max_improvement_passes: Option<usize>,
    /// How many alternative assignments to offer.
    pub max_alternatives: usize,
    /// Alternatives must score strictly above this.
    pub min_alternative_score: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            schedule_start: seconds_from_midnight(8, 0),
            inter_stop_travel_minutes: 5,
            fuel_rate_per_km: 0.15,
            average_speed_kmh: 40.0,
            heavy_vehicle_speed_cap_kmh: 90.0,
            category_speeds: CategorySpeeds::default(),
            penalties: ScoringPenalties::default(),
            max_improvement_passes: None,
            max_alternatives: 3,
            min_alternative_score: 50.0,
        }
    }
}

impl PlannerConfig {
    /// Average speed for a category, capped for heavy vehicles.
    pub fn effective_speed_kmh(&self, category: VehicleCategory) -> f64 {
        let speed = self.category_speeds.for_category(category);
        if category.is_heavy() {
            speed.min(self.heavy_vehicle_speed_cap_kmh)
        } else {
            speed
        }
    }

    pub fn validate(&self) -> Result<(), PlannerError> {
        let speeds = [
            ("average_speed_kmh", self.average_speed_kmh),
            ("heavy_vehicle_speed_cap_kmh", self.heavy_vehicle_speed_cap_kmh),
            ("category_speeds.car", self.category_speeds.car),
            ("category_speeds.van", self.category_speeds.van),
            ("category_speeds.light_truck", self.category_speeds.light_truck),
            ("category_speeds.heavy_truck", self.category_speeds.heavy_truck),
            ("category_speeds.articulated", self.category_speeds.articulated),
        ];
        for (name, value) in speeds {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlannerError::InvalidConfig { name, value });
            }
        }

        if !self.fuel_rate_per_km.is_finite() || self.fuel_rate_per_km < 0.0 {
            return Err(PlannerError::InvalidConfig {
                name: "fuel_rate_per_km",
                value: self.fuel_rate_per_km,
            });
        }

        Ok(())
    }
}
