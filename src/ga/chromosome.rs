//! Tour chromosome for the pickup-ordering GA.

use u_metaheur::ga::Individual;

/// A visiting order: a permutation of location indices.
///
/// Fitness is the tour cost from
/// [`TourEvaluator::cost`](crate::evaluation::TourEvaluator::cost).
/// Lower fitness = better tour.
///
/// # Examples
///
/// ```
/// use shuttle_routing::ga::Tour;
/// use u_metaheur::ga::Individual;
///
/// let tour = Tour::new(vec![2, 0, 1]);
/// assert_eq!(tour.order(), &[2, 0, 1]);
/// assert_eq!(tour.fitness(), f64::INFINITY);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    order: Vec<usize>,
    fitness: f64,
}

impl Tour {
    /// Creates an unevaluated tour.
    pub fn new(order: Vec<usize>) -> Self {
        Self {
            order,
            fitness: f64::INFINITY,
        }
    }

    /// Location indices in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn order_mut(&mut self) -> &mut Vec<usize> {
        &mut self.order
    }

    /// Consumes the tour, returning its visiting order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Individual for Tour {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_new() {
        let tour = Tour::new(vec![1, 2, 0]);
        assert_eq!(tour.order(), &[1, 2, 0]);
        assert_eq!(tour.len(), 3);
        assert!(!tour.is_empty());
        assert_eq!(tour.fitness(), f64::INFINITY);
    }

    #[test]
    fn test_tour_set_fitness() {
        let mut tour = Tour::new(vec![0, 1]);
        tour.set_fitness(4.25);
        assert_eq!(tour.fitness(), 4.25);
        assert_eq!(tour.clone().fitness(), 4.25);
    }

    #[test]
    fn test_tour_mutate_order() {
        let mut tour = Tour::new(vec![0, 1, 2]);
        tour.order_mut().swap(0, 2);
        assert_eq!(tour.into_order(), vec![2, 1, 0]);
    }
}
