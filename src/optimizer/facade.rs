//! Request-level route optimization.

use tracing::instrument;

use crate::config::EngineSettings;
use crate::error::Error;
use crate::models::{Location, OptimizationConfig, OptimizationResult, RouteConstraints};

use super::{Optimizer, Strategy};

/// Entry point used by the dispatch service to order a vehicle's pickups.
///
/// Holds validated [`EngineSettings`]; each call is independent, so one
/// instance can serve concurrent requests.
///
/// # Examples
///
/// ```
/// use shuttle_routing::models::{Location, OptimizationConfig, RouteConstraints};
/// use shuttle_routing::optimizer::RouteOptimizer;
///
/// let optimizer = RouteOptimizer::default();
/// let locations = vec![
///     Location::new("w1", 12.97, 77.59),
///     Location::new("w2", 12.98, 77.60),
///     Location::new("w3", 12.96, 77.58),
/// ];
/// let config = OptimizationConfig::named("nearest_neighbor", 100);
///
/// let result = optimizer
///     .optimize_route(&locations, &config, &RouteConstraints::new(10), None)
///     .unwrap();
/// assert_eq!(result.len(), 3);
/// assert!(result.optimization_score > 0.0);
///
/// let err = optimizer
///     .optimize_route(&locations, &OptimizationConfig::named("bogus", 1), &RouteConstraints::new(10), None)
///     .unwrap_err();
/// assert_eq!(err.to_string(), "Unsupported optimization algorithm: bogus");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteOptimizer {
    settings: EngineSettings,
}

impl RouteOptimizer {
    /// Creates an optimizer, rejecting invalid settings.
    pub fn new(settings: EngineSettings) -> Result<Self, Error> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Orders `locations` with the algorithm named in `config`.
    ///
    /// `start_location`, when given, replaces `constraints.start_location()`.
    /// Fails with [`Error::UnsupportedAlgorithm`] for an unknown name, or
    /// [`Error::Search`] if the runner rejects the configuration fitted to
    /// `config.max_iterations`.
    #[instrument(
        level = "debug",
        skip_all,
        fields(algorithm = %config.algorithm, locations = locations.len())
    )]
    pub fn optimize_route(
        &self,
        locations: &[Location],
        config: &OptimizationConfig,
        constraints: &RouteConstraints,
        start_location: Option<&Location>,
    ) -> Result<OptimizationResult, Error> {
        let algorithm = config.algorithm()?;

        let constraints = match start_location {
            Some(start) => constraints.clone().with_start_location(start.clone()),
            None => constraints.clone(),
        };

        let strategy = Strategy::new(algorithm, &self.settings)?;
        tracing::debug!(
            max_iterations = config.max_iterations,
            stop_limit = constraints.stop_limit(),
            "Dispatching route optimization"
        );

        let result = strategy.optimize(locations, config, &constraints)?;

        tracing::info!(
            stops = result.len(),
            skipped = result.metadata.locations_skipped,
            total_distance = result.total_distance,
            score = result.optimization_score,
            "Route optimized"
        );
        Ok(result)
    }
}
