//! Genetic-algorithm strategy.

use u_metaheur::ga::GaRunner;

use crate::config::RouteSettings;
use crate::constructive::nearest_neighbor_tour;
use crate::distance::DistanceMatrix;
use crate::error::Error;
use crate::evaluation::TourEvaluator;
use crate::ga::{GeneticSettings, TourGaProblem};
use crate::local_search::two_opt_improve;
use crate::models::{
    Algorithm, Location, OptimizationConfig, OptimizationMetadata, OptimizationResult,
    RouteConstraints,
};

use super::route::finish_route;
use super::{small_input_fallback, Optimizer};

/// Evolves visiting orders with OX crossover and swap mutation.
///
/// Runs exactly `config.max_iterations` generations; a zero budget returns
/// the nearest-neighbor tour unsearched. Inputs of two locations or fewer
/// are ordered by nearest-neighbor instead.
///
/// # Examples
///
/// ```
/// use shuttle_routing::models::{Algorithm, Location, OptimizationConfig, RouteConstraints};
/// use shuttle_routing::optimizer::{GeneticOptimizer, Optimizer};
///
/// let locations: Vec<Location> = (0..6)
///     .map(|i| Location::new(format!("w{i}"), (i * 7 % 5) as f64 * 0.01, i as f64 * 0.01))
///     .collect();
/// let config = OptimizationConfig::new(Algorithm::Genetic, 40);
/// let result = GeneticOptimizer::default()
///     .with_seed(Some(42))
///     .optimize(&locations, &config, &RouteConstraints::new(10))
///     .unwrap();
/// assert_eq!(result.len(), 6);
/// assert_eq!(result.metadata.generations, Some(40));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeneticOptimizer {
    settings: RouteSettings,
    genetic: GeneticSettings,
    seed: Option<u64>,
}

impl GeneticOptimizer {
    /// Creates the strategy, rejecting an invalid travel model or GA tuning.
    pub fn new(settings: RouteSettings, genetic: GeneticSettings) -> Result<Self, Error> {
        settings.validate()?;
        genetic
            .validate()
            .map_err(|e| Error::InvalidSettings(format!("genetic: {e}")))?;
        Ok(Self {
            settings,
            genetic,
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

impl Optimizer for GeneticOptimizer {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Genetic
    }

    fn optimize(
        &self,
        locations: &[Location],
        config: &OptimizationConfig,
        constraints: &RouteConstraints,
    ) -> Result<OptimizationResult, Error> {
        if let Some(result) = small_input_fallback(
            Algorithm::Genetic,
            &self.settings,
            locations,
            config,
            constraints,
        )? {
            return Ok(result);
        }

        let distances = DistanceMatrix::from_locations(locations, constraints.start_location());
        let problem = TourGaProblem::new(
            TourEvaluator::new(&distances, &self.settings)
                .with_pickup_priority(config.prioritize_pickup_time),
        );
        let evaluator = problem.evaluator();

        let generations = config.max_iterations;
        let (mut tour, mut cost) = if generations == 0 {
            let seed = nearest_neighbor_tour(&distances, locations.len()).tour;
            let cost = evaluator.cost(&seed);
            (seed, cost)
        } else {
            let ga = self.genetic.to_ga_config(generations, self.seed);
            let result = GaRunner::run(&problem, &ga).map_err(Error::Search)?;
            (result.best.into_order(), result.best_fitness)
        };

        if self.genetic.two_opt_polish {
            let (polished, _) = two_opt_improve(&tour, &distances);
            let polished_cost = evaluator.cost(&polished);
            if polished_cost <= cost {
                cost = polished_cost;
                tour = polished;
            }
        }

        tracing::debug!(
            generations,
            population = self.genetic.population_size,
            cost,
            "Genetic search finished"
        );

        let metadata = OptimizationMetadata {
            generations: Some(generations),
            population_size: Some(self.genetic.population_size),
            // Co-located stops give a zero-cost tour.
            best_fitness: Some(1.0 / cost.max(f64::EPSILON)),
            ..Default::default()
        };

        Ok(finish_route(
            Algorithm::Genetic,
            locations,
            tour,
            evaluator,
            config,
            constraints,
            metadata,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimizer::NearestNeighborOptimizer;

    fn grid() -> Vec<Location> {
        let mut locations = Vec::new();
        for r in 0..3 {
            for c in 0..3 {
                locations.push(Location::new(
                    format!("r{r}c{c}"),
                    r as f64 * 0.01,
                    c as f64 * 0.01,
                ));
            }
        }
        locations
    }

    fn sorted_ids(result: &OptimizationResult) -> Vec<String> {
        let mut ids: Vec<String> = result.user_ids().iter().map(|s| s.to_string()).collect();
        ids.sort();
        ids
    }

    fn seeded(seed: u64) -> GeneticOptimizer {
        GeneticOptimizer::default().with_seed(Some(seed))
    }

    #[test]
    fn test_keeps_every_location() {
        let locations = grid();
        let config = OptimizationConfig::new(Algorithm::Genetic, 30);
        let result = seeded(5)
            .optimize(&locations, &config, &RouteConstraints::new(20))
            .unwrap();
        let mut expected: Vec<String> = locations.iter().map(|l| l.id().to_string()).collect();
        expected.sort();
        assert_eq!(sorted_ids(&result), expected);
        assert_eq!(result.metadata.generations, Some(30));
        assert_eq!(result.metadata.population_size, Some(50));
        assert!(!result.metadata.fell_back_to_nearest_neighbor);
    }

    #[test]
    fn test_polish_reaches_grid_optimum() {
        // A 3×3 grid with 0.01° spacing has a Hamiltonian path of 8 unit edges.
        let locations = grid();
        let config = OptimizationConfig::new(Algorithm::Genetic, 100);
        let result = seeded(42)
            .optimize(&locations, &config, &RouteConstraints::new(20))
            .unwrap();
        let unit = locations[0].distance_to(&locations[1]);
        assert!(result.total_distance < 10.0 * unit);
    }

    #[test]
    fn test_same_seed_same_route() {
        let locations = grid();
        let config = OptimizationConfig::new(Algorithm::Genetic, 20);
        let optimizer = seeded(9);
        let a = optimizer
            .optimize(&locations, &config, &RouteConstraints::new(20))
            .unwrap();
        let b = optimizer
            .optimize(&locations, &config, &RouteConstraints::new(20))
            .unwrap();
        assert_eq!(a.user_ids(), b.user_ids());
    }

    #[test]
    fn test_new_rejects_invalid_tuning() {
        let err = GeneticOptimizer::new(
            RouteSettings::default(),
            GeneticSettings::default().with_population_size(1),
        )
        .unwrap_err();
        assert!(err.to_string().contains("genetic:"), "{err}");
    }

    #[test]
    fn test_zero_generations_keeps_nearest_neighbor_order() {
        let locations = grid();
        let constraints = RouteConstraints::new(20);
        let config = OptimizationConfig::new(Algorithm::Genetic, 0);
        let optimizer = GeneticOptimizer::new(
            RouteSettings::default(),
            GeneticSettings::default().with_two_opt_polish(false),
        )
        .unwrap();
        let result = optimizer.optimize(&locations, &config, &constraints).unwrap();
        let nn = NearestNeighborOptimizer::default()
            .optimize(&locations, &config, &constraints)
            .unwrap();
        assert_eq!(result.user_ids(), nn.user_ids());
        assert_eq!(result.metadata.generations, Some(0));
    }

    #[test]
    fn test_two_locations_fall_back() {
        let locations = vec![Location::new("x", 0.0, 0.0), Location::new("y", 0.0, 0.01)];
        let config = OptimizationConfig::new(Algorithm::Genetic, 500);
        let result = seeded(1)
            .optimize(&locations, &config, &RouteConstraints::new(10))
            .unwrap();
        assert_eq!(result.algorithm, Algorithm::Genetic);
        assert_eq!(result.user_ids(), vec!["x", "y"]);
        assert!(result.metadata.fell_back_to_nearest_neighbor);
        assert!(result.metadata.generations.is_none());
        assert!(result.metadata.population_size.is_none());
    }

    #[test]
    fn test_truncation_after_search() {
        let locations = grid();
        let config = OptimizationConfig::new(Algorithm::Genetic, 10);
        let result = seeded(3)
            .optimize(&locations, &config, &RouteConstraints::new(4))
            .unwrap();
        assert_eq!(result.len(), 4);
        assert_eq!(result.metadata.locations_skipped, 5);
    }
}
