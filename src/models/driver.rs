//! Driver capacity snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Location;

/// Vehicle class inferred from passenger capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Sedan,
    Van,
    Minibus,
    Bus,
}

impl VehicleType {
    /// Classifies a vehicle by its passenger seats.
    pub fn for_capacity(max_passengers: u32) -> Self {
        match max_passengers {
            0..=4 => VehicleType::Sedan,
            5..=8 => VehicleType::Van,
            9..=15 => VehicleType::Minibus,
            _ => VehicleType::Bus,
        }
    }
}

/// A driver's seats and current occupancy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverCapacity {
    pub driver_id: String,
    pub max_passengers: u32,
    pub current_load: u32,
    pub available_slots: u32,
    pub vehicle_type: VehicleType,
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_location: Option<Location>,
    pub last_updated: DateTime<Utc>,
}

impl DriverCapacity {
    /// Returns the snapshot with `load` passengers on board.
    ///
    /// Loads above capacity leave zero available slots.
    pub fn with_current_load(mut self, load: u32) -> Self {
        self.current_load = load;
        self.available_slots = self.max_passengers.saturating_sub(load);
        self.is_available = self.available_slots > 0;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_type_boundaries() {
        assert_eq!(VehicleType::for_capacity(0), VehicleType::Sedan);
        assert_eq!(VehicleType::for_capacity(4), VehicleType::Sedan);
        assert_eq!(VehicleType::for_capacity(5), VehicleType::Van);
        assert_eq!(VehicleType::for_capacity(8), VehicleType::Van);
        assert_eq!(VehicleType::for_capacity(15), VehicleType::Minibus);
        assert_eq!(VehicleType::for_capacity(16), VehicleType::Bus);
    }
}
