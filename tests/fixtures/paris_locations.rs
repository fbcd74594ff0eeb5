//! Real Paris-area locations for realistic test fixtures.

#![allow(dead_code)]

use fleet_planner::{Coordinate, Stop};

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> Coordinate {
        Coordinate {
            lat: self.lat,
            lng: self.lng,
        }
    }

    pub fn stop(&self) -> Stop {
        Stop::new(self.name, self.coords()).with_address(self.name)
    }
}

pub const RUNGIS: Location = Location::new("Marché de Rungis", 48.7467, 2.3490);

// ============================================================================
// Restaurants and shops across central Paris
// ============================================================================

pub const DELIVERIES: &[Location] = &[
    Location::new("Le Train Bleu", 48.8448, 2.3735),
    Location::new("Bouillon Chartier", 48.8719, 2.3436),
    Location::new("Le Procope", 48.8530, 2.3388),
    Location::new("Brasserie Lipp", 48.8539, 2.3327),
    Location::new("Au Pied de Cochon", 48.8633, 2.3445),
    Location::new("La Coupole", 48.8425, 2.3239),
    Location::new("Le Grand Véfour", 48.8660, 2.3376),
    Location::new("Bofinger", 48.8537, 2.3689),
    Location::new("Le Dôme", 48.8423, 2.3296),
    Location::new("Café de Flore", 48.8542, 2.3327),
    Location::new("Galeries Lafayette", 48.8738, 2.3320),
    Location::new("Marché des Enfants Rouges", 48.8627, 2.3620),
];

// ============================================================================
// Suburban sites, further from the depot
// ============================================================================

pub const SUBURBS: &[Location] = &[
    Location::new("Versailles", 48.8049, 2.1204),
    Location::new("Saint-Denis", 48.9362, 2.3574),
    Location::new("Créteil", 48.7904, 2.4556),
    Location::new("Nanterre", 48.8924, 2.2071),
    Location::new("Montreuil", 48.8638, 2.4485),
];

pub fn depot() -> Coordinate {
    RUNGIS.coords()
}

pub fn delivery_stops() -> Vec<Stop> {
    DELIVERIES.iter().map(Location::stop).collect()
}

pub fn suburban_stops() -> Vec<Stop> {
    SUBURBS.iter().map(Location::stop).collect()
}
