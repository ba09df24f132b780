//! Geographic pickup location.

use serde::{Deserialize, Serialize};

/// A worker pickup point (or a vehicle start point).
///
/// The identifier is opaque and expected to be unique within one optimization
/// call. Coordinates are in decimal degrees; range checking is the caller's
/// responsibility, out-of-range values never cause a panic.
///
/// # Examples
///
/// ```
/// use shuttle_routing::models::Location;
///
/// let depot = Location::new("depot", 40.7128, -74.0060);
/// assert_eq!(depot.id(), "depot");
/// assert_eq!(depot.latitude(), 40.7128);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    id: String,
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// Creates a new location.
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            latitude,
            longitude,
        }
    }

    /// Location identifier (worker ID for pickups).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another location, in kilometers.
    pub fn distance_to(&self, other: &Location) -> f64 {
        crate::distance::haversine_km(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_new() {
        let loc = Location::new("w-1", 10.0, 20.0);
        assert_eq!(loc.id(), "w-1");
        assert_eq!(loc.latitude(), 10.0);
        assert_eq!(loc.longitude(), 20.0);
    }

    #[test]
    fn test_location_distance_symmetric() {
        let a = Location::new("a", 51.5074, -0.1278);
        let b = Location::new("b", 48.8566, 2.3522);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-9);
    }

    #[test]
    fn test_location_serde_camel_case() {
        let loc = Location::new("w-7", 1.5, -2.5);
        let json = serde_json::to_string(&loc).expect("serialize");
        assert_eq!(json, r#"{"id":"w-7","latitude":1.5,"longitude":-2.5}"#);
        let back: Location = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, loc);
    }
}
