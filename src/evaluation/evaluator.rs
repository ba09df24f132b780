//! Tour evaluator that computes distance, duration and cost.

use crate::config::RouteSettings;
use crate::distance::DistanceMatrix;

/// Weight of the mean cumulative pickup distance when pickup time is
/// prioritized.
const PICKUP_TIME_WEIGHT: f64 = 0.1;

/// Evaluates open-path tours (start point → stops in order, no return leg).
///
/// A tour is a sequence of location indices into the [`DistanceMatrix`].
/// The evaluator is the single objective shared by every search strategy.
///
/// # Examples
///
/// ```
/// use shuttle_routing::config::RouteSettings;
/// use shuttle_routing::distance::DistanceMatrix;
/// use shuttle_routing::evaluation::TourEvaluator;
/// use shuttle_routing::models::Location;
///
/// let locations = vec![
///     Location::new("a", 0.0, 0.0),
///     Location::new("b", 0.0, 0.1),
///     Location::new("c", 0.0, 0.2),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations, None);
/// let settings = RouteSettings::default();
/// let evaluator = TourEvaluator::new(&dm, &settings);
///
/// assert!(evaluator.distance(&[0, 1, 2]) < evaluator.distance(&[0, 2, 1]));
/// assert_eq!(evaluator.distance(&[1]), 0.0);
/// ```
pub struct TourEvaluator<'a> {
    distances: &'a DistanceMatrix,
    settings: &'a RouteSettings,
    pickup_weight: f64,
}

impl<'a> TourEvaluator<'a> {
    /// Creates a new evaluator for the given distances and travel model.
    pub fn new(distances: &'a DistanceMatrix, settings: &'a RouteSettings) -> Self {
        Self {
            distances,
            settings,
            pickup_weight: 0.0,
        }
    }

    /// Adds the mean cumulative pickup distance to the cost, so tours that
    /// reach riders sooner win ties on length.
    pub fn with_pickup_priority(mut self, prioritize: bool) -> Self {
        self.pickup_weight = if prioritize { PICKUP_TIME_WEIGHT } else { 0.0 };
        self
    }

    /// The underlying distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        self.distances
    }

    /// Leg lengths in visiting order.
    ///
    /// The first entry is the leg from the start point when one exists,
    /// otherwise zero (the route begins at the first stop).
    pub fn legs(&self, tour: &[usize]) -> Vec<f64> {
        let mut legs = Vec::with_capacity(tour.len());
        let mut prev = self.distances.start();
        for &idx in tour {
            legs.push(prev.map_or(0.0, |p| self.distances.get(p, idx)));
            prev = Some(idx);
        }
        legs
    }

    /// Sum of all legs, including the start leg.
    pub fn path_distance(&self, tour: &[usize]) -> f64 {
        self.legs(tour).iter().sum()
    }

    /// Reported route distance in kilometers.
    ///
    /// Zero for empty and single-stop routes; otherwise the full path
    /// distance including the start leg.
    pub fn distance(&self, tour: &[usize]) -> f64 {
        if tour.len() <= 1 {
            0.0
        } else {
            self.path_distance(tour)
        }
    }

    /// Estimated duration in minutes for a route of `stops` stops and
    /// `distance` kilometers.
    pub fn duration_minutes(&self, distance: f64, stops: usize) -> f64 {
        if stops == 0 {
            return 0.0;
        }
        distance / self.settings.average_speed_kmh * 60.0
            + stops as f64 * self.settings.service_minutes_per_stop
    }

    /// Search objective. Lower is better.
    pub fn cost(&self, tour: &[usize]) -> f64 {
        let legs = self.legs(tour);
        let total: f64 = legs.iter().sum();
        if self.pickup_weight == 0.0 || legs.is_empty() {
            return total;
        }
        let mut cumulative = 0.0;
        let mut cumulative_sum = 0.0;
        for leg in &legs {
            cumulative += leg;
            cumulative_sum += cumulative;
        }
        total + self.pickup_weight * cumulative_sum / legs.len() as f64
    }

    /// Length of the longest prefix of `tour` whose estimated duration fits
    /// within `max_duration` minutes.
    pub fn duration_feasible_prefix(&self, tour: &[usize], max_duration: f64) -> usize {
        let mut len = tour.len();
        while len > 0 {
            let prefix = &tour[..len];
            if self.duration_minutes(self.distance(prefix), len) <= max_duration {
                break;
            }
            len -= 1;
        }
        len
    }
}
