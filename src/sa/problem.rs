//! SA problem definition for pickup ordering.
//!
//! Starts from the nearest-neighbor tour and moves by reversing a random
//! segment (a 2-opt move on the open path).

use rand::Rng;
use u_metaheur::ga::operators::invert_mutation;
use u_metaheur::sa::SaProblem;

use crate::constructive::nearest_neighbor_tour;
use crate::evaluation::TourEvaluator;

/// SA problem over visiting orders of every location in a distance matrix.
///
/// # Examples
///
/// ```
/// use shuttle_routing::config::RouteSettings;
/// use shuttle_routing::distance::DistanceMatrix;
/// use shuttle_routing::evaluation::TourEvaluator;
/// use shuttle_routing::models::Location;
/// use shuttle_routing::sa::{AnnealingSettings, TourSaProblem};
/// use u_metaheur::sa::{SaProblem, SaRunner};
///
/// let locations: Vec<Location> = (0..5)
///     .map(|i| Location::new(format!("w{i}"), (i % 2) as f64 * 0.01, i as f64 * 0.01))
///     .collect();
/// let dm = DistanceMatrix::from_locations(&locations, None);
/// let settings = RouteSettings::default();
/// let problem = TourSaProblem::new(TourEvaluator::new(&dm, &settings));
///
/// let config = AnnealingSettings::default().to_sa_config(200, Some(1));
/// let result = SaRunner::run(&problem, &config);
/// assert_eq!(result.best.len(), 5);
/// assert_eq!(result.iterations, 200);
/// let seed = problem.initial_solution(&mut u_numflow::random::create_rng(0));
/// assert!(result.best_cost <= problem.cost(&seed));
/// ```
pub struct TourSaProblem<'a> {
    evaluator: TourEvaluator<'a>,
}

impl<'a> TourSaProblem<'a> {
    pub fn new(evaluator: TourEvaluator<'a>) -> Self {
        Self { evaluator }
    }

    pub fn evaluator(&self) -> &TourEvaluator<'a> {
        &self.evaluator
    }
}

impl SaProblem for TourSaProblem<'_> {
    type Solution = Vec<usize>;

    fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Vec<usize> {
        let distances = self.evaluator.distances();
        nearest_neighbor_tour(distances, distances.num_locations()).tour
    }

    fn cost(&self, tour: &Vec<usize>) -> f64 {
        self.evaluator.cost(tour)
    }

    fn neighbor<R: Rng>(&self, tour: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        let mut next = tour.clone();
        invert_mutation(&mut next, rng);
        next
    }
}
