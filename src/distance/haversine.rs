//! Great-circle distance on a spherical Earth.

use crate::models::Location;

/// Earth's mean radius in kilometers (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Haversine distance between two locations, in kilometers.
///
/// Symmetric, zero for identical coordinates, and total over all inputs:
/// poles and the antimeridian are fine, NaN coordinates yield NaN.
///
/// # Examples
///
/// ```
/// use shuttle_routing::models::Location;
/// use shuttle_routing::distance::haversine_km;
///
/// let a = Location::new("a", 0.0, 0.0);
/// let b = Location::new("b", 0.0, 1.0);
/// // One degree of longitude at the equator is about 111.2 km.
/// assert!((haversine_km(&a, &b) - 111.195).abs() < 0.01);
/// ```
pub fn haversine_km(a: &Location, b: &Location) -> f64 {
    haversine_coords(a.latitude(), a.longitude(), b.latitude(), b.longitude())
}

/// Haversine distance between raw `(lat, lon)` degree pairs, in kilometers.
pub fn haversine_coords(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push h slightly above 1 near antipodes.
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(lat: f64, lon: f64) -> Location {
        Location::new("x", lat, lon)
    }

    #[test]
    fn test_same_point_is_zero() {
        assert_eq!(haversine_km(&loc(36.1, -115.1), &loc(36.1, -115.1)), 0.0);
    }

    #[test]
    fn test_known_distance() {
        // Las Vegas to Los Angeles is roughly 370 km.
        let d = haversine_km(&loc(36.17, -115.14), &loc(34.05, -118.24));
        assert!(d > 350.0 && d < 400.0, "got {d}");
    }

    #[test]
    fn test_symmetric() {
        let a = loc(-33.8688, 151.2093);
        let b = loc(35.6762, 139.6503);
        assert_eq!(haversine_km(&a, &b), haversine_km(&b, &a));
    }

    #[test]
    fn test_poles() {
        let d = haversine_km(&loc(90.0, 0.0), &loc(-90.0, 0.0));
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((d - half_circumference).abs() < 1e-6);
        // Longitude is irrelevant at a pole.
        assert!(haversine_km(&loc(90.0, 10.0), &loc(90.0, -170.0)) < 1e-6);
    }

    #[test]
    fn test_antimeridian() {
        let d = haversine_km(&loc(0.0, 179.5), &loc(0.0, -179.5));
        assert!((d - 111.195).abs() < 0.01, "got {d}");
        let d = haversine_km(&loc(0.0, 180.0), &loc(0.0, -180.0));
        assert!(d < 1e-6);
    }

    #[test]
    fn test_antipodal_is_finite() {
        let d = haversine_km(&loc(10.0, 20.0), &loc(-10.0, -160.0));
        assert!(d.is_finite());
        assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
    }

    #[test]
    fn test_nan_propagates_without_panic() {
        assert!(haversine_km(&loc(f64::NAN, 0.0), &loc(0.0, 0.0)).is_nan());
    }
}
