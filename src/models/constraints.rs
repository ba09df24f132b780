//! Route constraints and optimization configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Location;
use crate::error::Error;

/// Operational limits for a single vehicle's pickup route.
///
/// `None` for `max_duration` or `vehicle_capacity` means unbounded.
///
/// # Examples
///
/// ```
/// use shuttle_routing::models::RouteConstraints;
///
/// let c = RouteConstraints::new(10)
///     .with_max_duration(90.0)
///     .with_vehicle_capacity(12);
/// assert_eq!(c.max_stops(), 10);
/// assert_eq!(c.stop_limit(), 10);
/// assert_eq!(c.max_duration(), Some(90.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteConstraints {
    max_stops: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vehicle_capacity: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_location: Option<Location>,
}

impl RouteConstraints {
    /// Creates constraints with the given stop limit and no other bounds.
    pub fn new(max_stops: usize) -> Self {
        Self {
            max_stops,
            max_duration: None,
            vehicle_capacity: None,
            start_location: None,
        }
    }

    /// Sets the maximum trip duration in minutes.
    pub fn with_max_duration(mut self, minutes: f64) -> Self {
        self.max_duration = Some(minutes);
        self
    }

    /// Sets the vehicle's passenger capacity.
    pub fn with_vehicle_capacity(mut self, capacity: usize) -> Self {
        self.vehicle_capacity = Some(capacity);
        self
    }

    /// Sets the point the vehicle departs from.
    pub fn with_start_location(mut self, start: Location) -> Self {
        self.start_location = Some(start);
        self
    }

    /// Maximum number of pickups on the route.
    pub fn max_stops(&self) -> usize {
        self.max_stops
    }

    /// Maximum trip duration in minutes, if any.
    pub fn max_duration(&self) -> Option<f64> {
        self.max_duration
    }

    /// Passenger capacity of the vehicle, if any.
    pub fn vehicle_capacity(&self) -> Option<usize> {
        self.vehicle_capacity
    }

    /// Vehicle start point, if any.
    pub fn start_location(&self) -> Option<&Location> {
        self.start_location.as_ref()
    }

    /// Effective number of stops allowed: every pickup occupies one seat, so
    /// the vehicle capacity caps the stop count alongside `max_stops`.
    pub fn stop_limit(&self) -> usize {
        match self.vehicle_capacity {
            Some(capacity) => self.max_stops.min(capacity),
            None => self.max_stops,
        }
    }
}

/// Search strategy used to order the stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Greedy closest-next construction.
    NearestNeighbor,
    /// Population-based permutation search.
    Genetic,
    /// Trajectory search with a cooling schedule.
    SimulatedAnnealing,
}

impl Algorithm {
    /// Wire name of the algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::NearestNeighbor => "nearest_neighbor",
            Algorithm::Genetic => "genetic",
            Algorithm::SimulatedAnnealing => "simulated_annealing",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest_neighbor" => Ok(Algorithm::NearestNeighbor),
            "genetic" => Ok(Algorithm::Genetic),
            "simulated_annealing" => Ok(Algorithm::SimulatedAnnealing),
            other => Err(Error::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// Per-call optimization request parameters.
///
/// The algorithm is carried as the caller-supplied name and resolved by the
/// route optimizer, which reports unknown names as
/// [`Error::UnsupportedAlgorithm`].
///
/// The three flags bias route scoring and the search objective; they never
/// change an algorithm's structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationConfig {
    pub algorithm: String,
    pub max_iterations: usize,
    #[serde(default)]
    pub prioritize_pickup_time: bool,
    #[serde(default = "default_true")]
    pub minimize_distance: bool,
    #[serde(default)]
    pub balance_load: bool,
}

fn default_true() -> bool {
    true
}

impl OptimizationConfig {
    /// Creates a config for the given algorithm with distance minimization on.
    pub fn new(algorithm: Algorithm, max_iterations: usize) -> Self {
        Self::named(algorithm.as_str(), max_iterations)
    }

    /// Creates a config from a raw algorithm name (validated later).
    pub fn named(algorithm: impl Into<String>, max_iterations: usize) -> Self {
        Self {
            algorithm: algorithm.into(),
            max_iterations,
            prioritize_pickup_time: false,
            minimize_distance: true,
            balance_load: false,
        }
    }

    pub fn with_prioritize_pickup_time(mut self, on: bool) -> Self {
        self.prioritize_pickup_time = on;
        self
    }

    pub fn with_minimize_distance(mut self, on: bool) -> Self {
        self.minimize_distance = on;
        self
    }

    pub fn with_balance_load(mut self, on: bool) -> Self {
        self.balance_load = on;
        self
    }

    /// Resolves the requested algorithm.
    pub fn algorithm(&self) -> Result<Algorithm, Error> {
        self.algorithm.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_limit_capacity_caps() {
        let c = RouteConstraints::new(10).with_vehicle_capacity(4);
        assert_eq!(c.stop_limit(), 4);
        let c = RouteConstraints::new(3).with_vehicle_capacity(14);
        assert_eq!(c.stop_limit(), 3);
        assert_eq!(RouteConstraints::new(7).stop_limit(), 7);
    }

    #[test]
    fn test_algorithm_parse() {
        assert_eq!(
            "nearest_neighbor".parse::<Algorithm>().expect("known"),
            Algorithm::NearestNeighbor
        );
        assert_eq!("genetic".parse::<Algorithm>().expect("known"), Algorithm::Genetic);
        assert_eq!(
            "simulated_annealing".parse::<Algorithm>().expect("known"),
            Algorithm::SimulatedAnnealing
        );
    }

    #[test]
    fn test_algorithm_parse_unknown() {
        let err = "bogus".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported optimization algorithm: bogus");
    }

    #[test]
    fn test_algorithm_display_roundtrip() {
        for alg in [
            Algorithm::NearestNeighbor,
            Algorithm::Genetic,
            Algorithm::SimulatedAnnealing,
        ] {
            assert_eq!(alg.to_string().parse::<Algorithm>().expect("known"), alg);
        }
    }

    #[test]
    fn test_config_defaults_from_json() {
        let config: OptimizationConfig =
            serde_json::from_str(r#"{"algorithm":"genetic","maxIterations":150}"#)
                .expect("deserialize");
        assert_eq!(config.algorithm().expect("known"), Algorithm::Genetic);
        assert_eq!(config.max_iterations, 150);
        assert!(config.minimize_distance);
        assert!(!config.prioritize_pickup_time);
        assert!(!config.balance_load);
    }

    #[test]
    fn test_constraints_from_json() {
        let json = r#"{"maxStops":5,"maxDuration":60.0,"startLocation":{"id":"hub","latitude":1.0,"longitude":2.0}}"#;
        let c: RouteConstraints = serde_json::from_str(json).expect("deserialize");
        assert_eq!(c.max_stops(), 5);
        assert_eq!(c.max_duration(), Some(60.0));
        assert!(c.vehicle_capacity().is_none());
        assert_eq!(c.start_location().map(|l| l.id()), Some("hub"));
    }
}
