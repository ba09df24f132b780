//! Route optimization strategies and the façade that dispatches to them.
//!
//! - [`Optimizer`]: the interface every strategy implements
//! - [`NearestNeighborOptimizer`], [`GeneticOptimizer`], [`AnnealingOptimizer`]
//! - [`Strategy`]: tagged dispatch over the three
//! - [`RouteOptimizer`]: request-level entry point
//! - [`route_score`]: route quality score

mod annealing;
mod facade;
mod genetic;
mod nearest_neighbor;
mod route;
mod scoring;

pub use annealing::AnnealingOptimizer;
pub use facade::RouteOptimizer;
pub use genetic::GeneticOptimizer;
pub use nearest_neighbor::NearestNeighborOptimizer;
pub use scoring::route_score;

use crate::config::{EngineSettings, RouteSettings};
use crate::error::Error;
use crate::models::{Algorithm, Location, OptimizationConfig, OptimizationResult, RouteConstraints};

/// Orders one vehicle's pickups.
///
/// Implementations search the same permutation space and differ only in
/// strategy. The returned route honors the constraints' stop limit and
/// maximum duration, and its start point is `constraints.start_location()`.
pub trait Optimizer {
    /// The algorithm this strategy implements.
    fn algorithm(&self) -> Algorithm;

    /// Fails only with [`Error::Search`] when the runner rejects the
    /// configuration derived for `config.max_iterations`.
    fn optimize(
        &self,
        locations: &[Location],
        config: &OptimizationConfig,
        constraints: &RouteConstraints,
    ) -> Result<OptimizationResult, Error>;
}

/// A strategy selected by [`Algorithm`].
#[derive(Debug, Clone)]
pub enum Strategy {
    NearestNeighbor(NearestNeighborOptimizer),
    Genetic(GeneticOptimizer),
    SimulatedAnnealing(AnnealingOptimizer),
}

impl Strategy {
    /// Builds the strategy for `algorithm` from engine settings.
    pub fn new(algorithm: Algorithm, settings: &EngineSettings) -> Result<Self, Error> {
        let strategy = match algorithm {
            Algorithm::NearestNeighbor => {
                Strategy::NearestNeighbor(NearestNeighborOptimizer::new(settings.route.clone())?)
            }
            Algorithm::Genetic => Strategy::Genetic(
                GeneticOptimizer::new(settings.route.clone(), settings.genetic.clone())?
                    .with_seed(settings.seed),
            ),
            Algorithm::SimulatedAnnealing => Strategy::SimulatedAnnealing(
                AnnealingOptimizer::new(settings.route.clone(), settings.annealing.clone())?
                    .with_seed(settings.seed),
            ),
        };
        Ok(strategy)
    }
}

impl Optimizer for Strategy {
    fn algorithm(&self) -> Algorithm {
        match self {
            Strategy::NearestNeighbor(o) => o.algorithm(),
            Strategy::Genetic(o) => o.algorithm(),
            Strategy::SimulatedAnnealing(o) => o.algorithm(),
        }
    }

    fn optimize(
        &self,
        locations: &[Location],
        config: &OptimizationConfig,
        constraints: &RouteConstraints,
    ) -> Result<OptimizationResult, Error> {
        match self {
            Strategy::NearestNeighbor(o) => o.optimize(locations, config, constraints),
            Strategy::Genetic(o) => o.optimize(locations, config, constraints),
            Strategy::SimulatedAnnealing(o) => o.optimize(locations, config, constraints),
        }
    }
}

/// Inputs this small have a single sensible order; randomized strategies
/// hand them to nearest-neighbor.
const SMALL_INPUT: usize = 2;

/// Guard clause for the randomized strategies.
///
/// Returns the nearest-neighbor route, labelled with `algorithm` and flagged
/// as a fallback, when `locations` has [`SMALL_INPUT`] entries or fewer.
fn small_input_fallback(
    algorithm: Algorithm,
    settings: &RouteSettings,
    locations: &[Location],
    config: &OptimizationConfig,
    constraints: &RouteConstraints,
) -> Result<Option<OptimizationResult>, Error> {
    if locations.len() > SMALL_INPUT {
        return Ok(None);
    }
    tracing::debug!(
        %algorithm,
        locations = locations.len(),
        "Small input, using nearest-neighbor"
    );
    let mut result =
        NearestNeighborOptimizer::new(settings.clone())?.optimize(locations, config, constraints)?;
    result.algorithm = algorithm;
    result.metadata.fell_back_to_nearest_neighbor = true;
    Ok(Some(result))
}
