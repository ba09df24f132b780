//! Simulated-annealing strategy.

use u_metaheur::sa::SaRunner;

use crate::config::RouteSettings;
use crate::constructive::nearest_neighbor_tour;
use crate::distance::DistanceMatrix;
use crate::error::Error;
use crate::evaluation::TourEvaluator;
use crate::models::{
    Algorithm, Location, OptimizationConfig, OptimizationMetadata, OptimizationResult,
    RouteConstraints,
};
use crate::sa::{AnnealingSettings, TourSaProblem};

use super::route::finish_route;
use super::{small_input_fallback, Optimizer};

/// Anneals the nearest-neighbor tour with random segment reversals.
///
/// Runs exactly `config.max_iterations` moves and keeps the best tour seen;
/// a zero budget returns the seed unchanged. Inputs of two locations or
/// fewer are ordered by nearest-neighbor instead.
///
/// `initial_distance` and `improvement_found` compare the returned route
/// with the seed tour cut to the same number of stops.
#[derive(Debug, Clone, Default)]
pub struct AnnealingOptimizer {
    settings: RouteSettings,
    annealing: AnnealingSettings,
    seed: Option<u64>,
}

impl AnnealingOptimizer {
    /// Creates the strategy, rejecting an invalid travel model or schedule.
    pub fn new(settings: RouteSettings, annealing: AnnealingSettings) -> Result<Self, Error> {
        settings.validate()?;
        annealing
            .validate()
            .map_err(|e| Error::InvalidSettings(format!("annealing: {e}")))?;
        Ok(Self {
            settings,
            annealing,
            seed: None,
        })
    }

    /// Fixes the seed so runs are reproducible. `None` draws a fresh seed
    /// per call.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

impl Optimizer for AnnealingOptimizer {
    fn algorithm(&self) -> Algorithm {
        Algorithm::SimulatedAnnealing
    }

    fn optimize(
        &self,
        locations: &[Location],
        config: &OptimizationConfig,
        constraints: &RouteConstraints,
    ) -> Result<OptimizationResult, Error> {
        if let Some(result) = small_input_fallback(
            Algorithm::SimulatedAnnealing,
            &self.settings,
            locations,
            config,
            constraints,
        )? {
            return Ok(result);
        }

        let distances = DistanceMatrix::from_locations(locations, constraints.start_location());
        let problem = TourSaProblem::new(
            TourEvaluator::new(&distances, &self.settings)
                .with_pickup_priority(config.prioritize_pickup_time),
        );
        let evaluator = problem.evaluator();
        let seed_tour = nearest_neighbor_tour(&distances, locations.len()).tour;

        let mut metadata = OptimizationMetadata::default();
        let tour = if config.max_iterations == 0 {
            metadata.iterations = Some(0);
            metadata.final_temperature = Some(self.annealing.initial_temperature);
            metadata.accepted_moves = Some(0);
            seed_tour.clone()
        } else {
            let sa = self.annealing.to_sa_config(config.max_iterations, self.seed);
            sa.validate().map_err(Error::Search)?;
            let result = SaRunner::run(&problem, &sa);
            tracing::debug!(
                iterations = result.iterations,
                accepted = result.accepted_moves,
                improving = result.improving_moves,
                best_cost = result.best_cost,
                "Annealing finished"
            );
            metadata.iterations = Some(result.iterations);
            metadata.final_temperature = Some(result.final_temperature);
            metadata.accepted_moves = Some(result.accepted_moves);
            result.best
        };

        let mut result = finish_route(
            Algorithm::SimulatedAnnealing,
            locations,
            tour,
            evaluator,
            config,
            constraints,
            metadata,
        );

        let kept = result.len().min(seed_tour.len());
        let initial_distance = evaluator.distance(&seed_tour[..kept]);
        result.metadata.initial_distance = Some(initial_distance);
        result.metadata.improvement_found = Some(result.total_distance < initial_distance);
        Ok(result)
    }
}
