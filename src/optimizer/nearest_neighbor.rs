//! Greedy nearest-neighbor strategy.

use crate::config::RouteSettings;
use crate::constructive::nearest_neighbor_tour;
use crate::distance::DistanceMatrix;
use crate::error::Error;
use crate::evaluation::TourEvaluator;
use crate::models::{
    Algorithm, Location, OptimizationConfig, OptimizationMetadata, OptimizationResult,
    RouteConstraints,
};

use super::route::finish_route;
use super::Optimizer;

/// Orders stops by always driving to the closest unvisited pickup.
///
/// Deterministic: ties go to the earlier input location. Stops once the
/// stop limit is reached; the rest are reported as skipped.
///
/// # Examples
///
/// ```
/// use shuttle_routing::models::{Algorithm, Location, OptimizationConfig, RouteConstraints};
/// use shuttle_routing::optimizer::{NearestNeighborOptimizer, Optimizer};
///
/// let locations = vec![
///     Location::new("a", 0.0, 0.0),
///     Location::new("c", 0.0, 0.02),
///     Location::new("b", 0.0, 0.01),
/// ];
/// let config = OptimizationConfig::new(Algorithm::NearestNeighbor, 0);
/// let result = NearestNeighborOptimizer::default()
///     .optimize(&locations, &config, &RouteConstraints::new(10))
///     .unwrap();
/// assert_eq!(result.user_ids(), vec!["a", "b", "c"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NearestNeighborOptimizer {
    settings: RouteSettings,
}

impl NearestNeighborOptimizer {
    /// Creates the strategy, rejecting an invalid travel model.
    pub fn new(settings: RouteSettings) -> Result<Self, Error> {
        settings.validate()?;
        Ok(Self { settings })
    }
}

impl Optimizer for NearestNeighborOptimizer {
    fn algorithm(&self) -> Algorithm {
        Algorithm::NearestNeighbor
    }

    fn optimize(
        &self,
        locations: &[Location],
        config: &OptimizationConfig,
        constraints: &RouteConstraints,
    ) -> Result<OptimizationResult, Error> {
        let distances = DistanceMatrix::from_locations(locations, constraints.start_location());
        let evaluator = TourEvaluator::new(&distances, &self.settings);
        let nn = nearest_neighbor_tour(&distances, constraints.stop_limit());

        Ok(finish_route(
            Algorithm::NearestNeighbor,
            locations,
            nn.tour,
            &evaluator,
            config,
            constraints,
            OptimizationMetadata::default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> OptimizationConfig {
        OptimizationConfig::new(Algorithm::NearestNeighbor, 0)
    }

    fn run(locations: &[Location], constraints: &RouteConstraints) -> OptimizationResult {
        NearestNeighborOptimizer::default()
            .optimize(locations, &config(), constraints)
            .unwrap()
    }

    #[test]
    fn test_new_rejects_zero_speed() {
        let settings = RouteSettings {
            average_speed_kmh: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            NearestNeighborOptimizer::new(settings),
            Err(Error::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        let result = run(&[], &RouteConstraints::new(5));
        assert!(result.is_empty());
        assert_eq!(result.total_distance, 0.0);
        assert_eq!(result.optimization_score, 0.0);
    }

    #[test]
    fn test_single_location() {
        let locations = vec![Location::new("only", 10.0, 10.0)];
        let constraints =
            RouteConstraints::new(5).with_start_location(Location::new("hub", 10.1, 10.1));
        let result = run(&locations, &constraints);
        assert_eq!(result.user_ids(), vec!["only"]);
        assert_eq!(result.total_distance, 0.0);
        assert!(result.optimization_score > 0.0);
    }

    #[test]
    fn test_start_location_picks_first_stop() {
        let locations = vec![
            Location::new("west", 0.0, 0.0),
            Location::new("mid", 0.0, 0.05),
            Location::new("east", 0.0, 0.1),
        ];
        let constraints =
            RouteConstraints::new(5).with_start_location(Location::new("depot", 0.0, 0.11));
        let result = run(&locations, &constraints);
        assert_eq!(result.user_ids(), vec!["east", "mid", "west"]);
        // 0.01° from the depot, then 0.05° twice, at ~111.19 km per degree.
        assert!((result.total_distance - 0.11 * 111.19).abs() < 0.1);
    }

    #[test]
    fn test_max_stops_truncation() {
        let locations: Vec<Location> = (0..6)
            .map(|i| Location::new(format!("w{i}"), 0.0, i as f64 * 0.01))
            .collect();
        let result = run(&locations, &RouteConstraints::new(4));
        assert_eq!(result.user_ids(), vec!["w0", "w1", "w2", "w3"]);
        assert_eq!(result.metadata.locations_skipped, 2);
    }
}
