//! Typed domain values passed into the planner.
//!
//! Times of day are seconds from midnight, durations are minutes.

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Convert a wall-clock time to seconds from midnight.
pub const fn seconds_from_midnight(hours: i32, minutes: i32) -> i32 {
    hours * 3600 + minutes * 60
}

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Creates a coordinate, rejecting non-finite or out-of-range values.
    pub fn new(lat: f64, lng: f64) -> Result<Self, PlannerError> {
        let coordinate = Self { lat, lng };
        if coordinate.is_valid() {
            Ok(coordinate)
        } else {
            Err(PlannerError::InvalidCoordinate { lat, lng })
        }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

/// Per-stop operational requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StopRequirements {
    pub requires_liftgate: bool,
    pub requires_refrigeration: bool,
    /// Service must be performed by a driver holding a professional card.
    pub requires_professional_card: bool,
}

/// Allowed service interval, either bound optional (seconds from midnight).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: Option<i32>,
    pub end: Option<i32>,
}

impl TimeWindow {
    pub fn new(start: i32, end: i32) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }
}

/// A delivery or service location on a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub id: String,
    /// Missing or invalid locations exclude the stop from sequencing.
    pub location: Option<Coordinate>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub service_minutes: Option<u32>,
    #[serde(default)]
    pub time_window: Option<TimeWindow>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub requirements: StopRequirements,
    /// Position in the optimized route, set by the sequencer.
    #[serde(default)]
    pub order_index: Option<usize>,
}

impl Stop {
    pub fn new(id: impl Into<String>, location: Coordinate) -> Self {
        Self {
            id: id.into(),
            location: Some(location),
            address: String::new(),
            service_minutes: None,
            time_window: None,
            priority: Priority::Normal,
            requirements: StopRequirements::default(),
            order_index: None,
        }
    }

    /// A stop the caller could not geocode.
    pub fn unlocated(id: impl Into<String>) -> Self {
        Self {
            location: None,
            ..Self::new(id, Coordinate { lat: 0.0, lng: 0.0 })
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_service_minutes(mut self, minutes: u32) -> Self {
        self.service_minutes = Some(minutes);
        self
    }

    pub fn with_window(mut self, start: i32, end: i32) -> Self {
        self.time_window = Some(TimeWindow::new(start, end));
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_requirements(mut self, requirements: StopRequirements) -> Self {
        self.requirements = requirements;
        self
    }

    /// The stop location when present and usable for distance computation.
    pub fn valid_location(&self) -> Option<Coordinate> {
        self.location.filter(Coordinate::is_valid)
    }

    pub fn service_minutes(&self) -> u32 {
        self.service_minutes.unwrap_or(0)
    }
}

/// Driving licence classes, ordered from least to most permissive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LicenseType {
    B,
    C1,
    C,
    CE,
}

impl LicenseType {
    /// Whether a holder of this licence may drive vehicles requiring `required`.
    pub fn covers(self, required: LicenseType) -> bool {
        self >= required
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleCategory {
    Car,
    Van,
    LightTruck,
    HeavyTruck,
    Articulated,
}

impl VehicleCategory {
    /// Heavy vehicles are subject to the legal speed cap.
    pub fn is_heavy(self) -> bool {
        matches!(self, VehicleCategory::HeavyTruck | VehicleCategory::Articulated)
    }

    pub fn required_license(self) -> LicenseType {
        match self {
            VehicleCategory::Car | VehicleCategory::Van => LicenseType::B,
            VehicleCategory::LightTruck => LicenseType::C1,
            VehicleCategory::HeavyTruck => LicenseType::C,
            VehicleCategory::Articulated => LicenseType::CE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Equipment {
    pub refrigeration: bool,
    pub liftgate: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub registration: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub model: String,
    pub category: VehicleCategory,
    #[serde(default)]
    pub equipment: Equipment,
}

impl Vehicle {
    pub fn new(
        id: impl Into<String>,
        registration: impl Into<String>,
        category: VehicleCategory,
    ) -> Self {
        Self {
            id: id.into(),
            registration: registration.into(),
            brand: String::new(),
            model: String::new(),
            category,
            equipment: Equipment::default(),
        }
    }

    pub fn with_make(mut self, brand: impl Into<String>, model: impl Into<String>) -> Self {
        self.brand = brand.into();
        self.model = model.into();
        self
    }

    pub fn with_refrigeration(mut self) -> Self {
        self.equipment.refrigeration = true;
        self
    }

    pub fn with_liftgate(mut self) -> Self {
        self.equipment.liftgate = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub license_type: LicenseType,
    /// Holds a professional driver qualification card (CQC or equivalent).
    #[serde(default)]
    pub has_professional_card: bool,
}

impl Driver {
    pub fn new(id: impl Into<String>, name: impl Into<String>, license_type: LicenseType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            license_type,
            has_professional_card: false,
        }
    }

    pub fn with_professional_card(mut self) -> Self {
        self.has_professional_card = true;
        self
    }
}

/// Operational limits and scoring weights for a single route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConstraints {
    pub max_distance_km: f64,
    /// Start of the working day (seconds from midnight).
    pub start_time: i32,
    /// End of the working day (seconds from midnight).
    pub end_time: i32,
    pub max_duration_minutes: u32,
    pub max_stops: usize,
    pub require_refrigeration: bool,
    pub require_liftgate: bool,
    /// Relative weights in [0, 1]; they need not sum to one.
    pub distance_weight: f64,
    pub time_window_weight: f64,
    pub priority_weight: f64,
}

impl Default for RouteConstraints {
    fn default() -> Self {
        Self {
            max_distance_km: 300.0,
            start_time: seconds_from_midnight(8, 0),
            end_time: seconds_from_midnight(18, 0),
            max_duration_minutes: 600,
            max_stops: 50,
            require_refrigeration: false,
            require_liftgate: false,
            distance_weight: 0.4,
            time_window_weight: 0.3,
            priority_weight: 0.3,
        }
    }
}

impl RouteConstraints {
    /// Rejects negative or non-finite weights.
    pub fn validate(&self) -> Result<(), PlannerError> {
        let weights = [
            ("distance_weight", self.distance_weight),
            ("time_window_weight", self.time_window_weight),
            ("priority_weight", self.priority_weight),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(PlannerError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

/// A scored vehicle + driver pairing.
///
/// Borrows the vehicle and driver it scored; assignments are built fresh for
/// each optimization call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment<'a> {
    pub vehicle: &'a Vehicle,
    pub driver: &'a Driver,
    pub vehicle_score: f64,
    pub driver_score: f64,
    pub total_score: f64,
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_rejects_non_finite() {
        assert!(Coordinate::new(f64::NAN, 2.0).is_err());
        assert!(Coordinate::new(48.0, f64::INFINITY).is_err());
        assert!(Coordinate::new(91.0, 2.0).is_err());
        assert!(Coordinate::new(48.8566, 2.3522).is_ok());
    }

    #[test]
    fn test_stop_valid_location() {
        let stop = Stop::new("s1", Coordinate { lat: f64::NAN, lng: 2.0 });
        assert_eq!(stop.valid_location(), None);
        assert_eq!(Stop::unlocated("s2").valid_location(), None);
    }

    #[test]
    fn test_license_hierarchy() {
        assert!(LicenseType::CE.covers(LicenseType::C));
        assert!(LicenseType::C.covers(LicenseType::B));
        assert!(!LicenseType::B.covers(LicenseType::C1));
        assert!(!LicenseType::C1.covers(VehicleCategory::HeavyTruck.required_license()));
    }

    #[test]
    fn test_constraints_reject_negative_weight() {
        let constraints = RouteConstraints {
            priority_weight: -0.1,
            ..RouteConstraints::default()
        };
        assert_eq!(
            constraints.validate(),
            Err(PlannerError::InvalidWeight {
                name: "priority_weight",
                value: -0.1
            })
        );
        assert!(RouteConstraints::default().validate().is_ok());
    }
}
