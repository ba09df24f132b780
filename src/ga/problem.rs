//! GA problem definition for pickup ordering.
//!
//! Implements the [`GaProblem`](u_metaheur::ga::GaProblem) trait over
//! visiting orders of an open path.
//!
//! # Operators
//!
//! - **Initialization**: uniformly random permutations (Fisher-Yates)
//! - **Crossover**: order crossover (OX), preserves relative stop ordering
//! - **Mutation**: swap two stops
//! - **Evaluation**: [`TourEvaluator::cost`] of the open path

use rand::Rng;
use u_metaheur::ga::operators::{order_crossover, swap_mutation};
use u_metaheur::ga::GaProblem;
use u_numflow::random::shuffle;

use crate::evaluation::TourEvaluator;

use super::chromosome::Tour;

/// GA problem over visiting orders of every location in a distance matrix.
///
/// # Examples
///
/// ```
/// use shuttle_routing::config::RouteSettings;
/// use shuttle_routing::distance::DistanceMatrix;
/// use shuttle_routing::evaluation::TourEvaluator;
/// use shuttle_routing::ga::{GeneticSettings, TourGaProblem};
/// use shuttle_routing::models::Location;
/// use u_metaheur::ga::GaRunner;
///
/// let locations: Vec<Location> = (0..6)
///     .map(|i| Location::new(format!("w{i}"), 0.0, i as f64 * 0.01))
///     .collect();
/// let dm = DistanceMatrix::from_locations(&locations, None);
/// let settings = RouteSettings::default();
/// let problem = TourGaProblem::new(TourEvaluator::new(&dm, &settings));
///
/// let config = GeneticSettings::default().to_ga_config(30, Some(42));
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.best.len(), 6);
/// assert_eq!(result.generations, 30);
/// assert!(result.best_fitness.is_finite());
/// ```
pub struct TourGaProblem<'a> {
    evaluator: TourEvaluator<'a>,
    num_locations: usize,
}

impl<'a> TourGaProblem<'a> {
    pub fn new(evaluator: TourEvaluator<'a>) -> Self {
        let num_locations = evaluator.distances().num_locations();
        Self {
            evaluator,
            num_locations,
        }
    }

    /// The objective used for evaluation.
    pub fn evaluator(&self) -> &TourEvaluator<'a> {
        &self.evaluator
    }
}

impl GaProblem for TourGaProblem<'_> {
    type Individual = Tour;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Tour {
        let mut order: Vec<usize> = (0..self.num_locations).collect();
        shuffle(&mut order, rng);
        Tour::new(order)
    }

    fn evaluate(&self, individual: &Tour) -> f64 {
        self.evaluator.cost(individual.order())
    }

    fn crossover<R: Rng>(&self, parent1: &Tour, parent2: &Tour, rng: &mut R) -> Vec<Tour> {
        let (c1, c2) = order_crossover(parent1.order(), parent2.order(), rng);
        vec![Tour::new(c1), Tour::new(c2)]
    }

    fn mutate<R: Rng>(&self, individual: &mut Tour, rng: &mut R) {
        swap_mutation(individual.order_mut(), rng);
    }

    fn on_generation(&self, generation: usize, best_fitness: f64) {
        tracing::trace!(generation, best_cost = best_fitness, "GA generation");
    }
}
