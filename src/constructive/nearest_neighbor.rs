//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: from the current position, always visit the
//! closest unvisited location. Without a start point the route begins at the
//! first input location.
//!
//! # Complexity
//!
//! O(n²) where n = number of locations.

use crate::distance::DistanceMatrix;

/// A greedily constructed tour.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestNeighborTour {
    /// Location indices in visiting order.
    pub tour: Vec<usize>,
    /// Location indices left unvisited because the stop limit was reached,
    /// in input order.
    pub skipped: Vec<usize>,
}

/// Constructs a tour over all pickups in `distances` using the
/// nearest-neighbor rule, stopping after `limit` stops.
///
/// Ties are broken by input order (first occurrence wins), so the result is
/// fully deterministic.
///
/// # Examples
///
/// ```
/// use shuttle_routing::models::Location;
/// use shuttle_routing::distance::DistanceMatrix;
/// use shuttle_routing::constructive::nearest_neighbor_tour;
///
/// let locations = vec![
///     Location::new("a", 0.0, 0.0),
///     Location::new("far", 0.0, 0.3),
///     Location::new("near", 0.0, 0.1),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations, None);
///
/// let nn = nearest_neighbor_tour(&dm, usize::MAX);
/// assert_eq!(nn.tour, vec![0, 2, 1]);
/// assert!(nn.skipped.is_empty());
/// ```
pub fn nearest_neighbor_tour(distances: &DistanceMatrix, limit: usize) -> NearestNeighborTour {
    let n = distances.num_locations();
    if n == 0 || limit == 0 {
        return NearestNeighborTour {
            tour: Vec::new(),
            skipped: (0..n).collect(),
        };
    }

    let mut unvisited: Vec<usize> = (0..n).collect();
    let mut tour = Vec::with_capacity(n.min(limit));
    let mut current = distances.start().unwrap_or(0);

    while tour.len() < limit {
        let Some(next) = distances.nearest_neighbor(current, &unvisited) else {
            break;
        };
        // `unvisited` stays in input order so ties keep resolving to the
        // earliest location.
        unvisited.retain(|&i| i != next);
        tour.push(next);
        current = next;
    }

    NearestNeighborTour {
        tour,
        skipped: unvisited,
    }
}
