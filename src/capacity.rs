//! Driver capacity snapshots.

use chrono::Utc;

use crate::models::{DriverCapacity, Location, VehicleType};

/// Builds a capacity snapshot for a driver who declares `max_passengers`
/// seats.
///
/// The vehicle starts empty, so every seat is available. Use
/// [`DriverCapacity::with_current_load`] when the load is known.
///
/// # Examples
///
/// ```
/// use shuttle_routing::capacity::assess_driver_capacity;
/// use shuttle_routing::models::VehicleType;
///
/// let snapshot = assess_driver_capacity("d-7", 12, None);
/// assert_eq!(snapshot.available_slots, 12);
/// assert_eq!(snapshot.vehicle_type, VehicleType::Minibus);
/// assert!(snapshot.is_available);
/// ```
pub fn assess_driver_capacity(
    driver_id: &str,
    max_passengers: u32,
    current_location: Option<Location>,
) -> DriverCapacity {
    let snapshot = DriverCapacity {
        driver_id: driver_id.to_string(),
        max_passengers,
        current_load: 0,
        available_slots: max_passengers,
        vehicle_type: VehicleType::for_capacity(max_passengers),
        is_available: max_passengers > 0,
        current_location,
        last_updated: Utc::now(),
    };
    tracing::debug!(
        driver_id,
        max_passengers,
        vehicle_type = ?snapshot.vehicle_type,
        "Driver capacity assessed"
    );
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_vehicle() {
        let loc = Location::new("d-1", 12.9, 77.6);
        let snapshot = assess_driver_capacity("d-1", 4, Some(loc.clone()));
        assert_eq!(snapshot.driver_id, "d-1");
        assert_eq!(snapshot.current_load, 0);
        assert_eq!(snapshot.available_slots, 4);
        assert_eq!(snapshot.vehicle_type, VehicleType::Sedan);
        assert_eq!(snapshot.current_location, Some(loc));
    }

    #[test]
    fn test_zero_seats_unavailable() {
        let snapshot = assess_driver_capacity("d-2", 0, None);
        assert!(!snapshot.is_available);
        assert_eq!(snapshot.available_slots, 0);
    }

    #[test]
    fn test_with_current_load() {
        let snapshot = assess_driver_capacity("d-3", 8, None).with_current_load(5);
        assert_eq!(snapshot.vehicle_type, VehicleType::Van);
        assert_eq!(snapshot.available_slots, 3);
        assert!(snapshot.is_available);

        let full = snapshot.with_current_load(11);
        assert_eq!(full.available_slots, 0);
        assert!(!full.is_available);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json =
            serde_json::to_value(assess_driver_capacity("d-4", 40, None)).expect("serialize");
        assert_eq!(json["vehicleType"], "bus");
        assert_eq!(json["availableSlots"], 40);
        assert!(json.get("currentLocation").is_none());
    }
}
