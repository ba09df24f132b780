//! Open-path 2-opt improvement.
//!
//! # Algorithm
//!
//! For each pair of positions `i < j`, reversing the segment `[i..=j]`
//! changes only the two boundary edges:
//!
//! ```text
//! delta = d(prev_i, r[j]) + d(r[i], next_j) - d(prev_i, r[i]) - d(r[j], next_j)
//! ```
//!
//! A pickup route is an open path: `prev_i` is the start point (or nothing)
//! for `i = 0`, and there is no `next_j` after the last stop. If delta < 0,
//! the segment is reversed. Repeats until no improvement is found
//! (first-improvement strategy).
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;

/// Applies 2-opt improvement to an open tour of location indices.
///
/// The tour departs from `distances.start()` when set. Returns the improved
/// sequence and its path distance (start leg included). The result is always
/// a permutation of the input.
///
/// # Examples
///
/// ```
/// use shuttle_routing::models::Location;
/// use shuttle_routing::distance::DistanceMatrix;
/// use shuttle_routing::local_search::two_opt_improve;
///
/// let locations = vec![
///     Location::new("a", 0.0, 0.0),
///     Location::new("b", 0.0, 0.1),
///     Location::new("c", 0.0, 0.2),
///     Location::new("d", 0.0, 0.3),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations, None);
///
/// let (improved, dist) = two_opt_improve(&[0, 2, 1, 3], &dm);
/// assert_eq!(improved, vec![0, 1, 2, 3]);
/// assert!((dist - dm.get(0, 3)).abs() < 1e-9);
/// ```
pub fn two_opt_improve(tour: &[usize], distances: &DistanceMatrix) -> (Vec<usize>, f64) {
    let mut current = tour.to_vec();
    if current.len() < 2 {
        let dist = path_distance(&current, distances);
        return (current, dist);
    }

    let mut improved = true;
    while improved {
        improved = false;
        let n = current.len();

        for i in 0..n - 1 {
            for j in i + 1..n {
                let delta = two_opt_delta(&current, distances, i, j);
                if delta < -1e-10 {
                    current[i..=j].reverse();
                    improved = true;
                }
            }
        }
    }

    let dist = path_distance(&current, distances);
    (current, dist)
}

/// Distance change from reversing `tour[i..=j]` on an open path.
pub(crate) fn two_opt_delta(tour: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let n = tour.len();
    let prev_i = if i == 0 {
        distances.start()
    } else {
        Some(tour[i - 1])
    };
    let next_j = if j + 1 == n { None } else { Some(tour[j + 1]) };

    let edge = |a: Option<usize>, b: usize| a.map_or(0.0, |a| distances.get(a, b));

    let old_cost = edge(prev_i, tour[i]) + edge(next_j, tour[j]);
    let new_cost = edge(prev_i, tour[j]) + edge(next_j, tour[i]);

    new_cost - old_cost
}

/// Computes `start → tour[0] → ... → tour[n-1]`, without a return leg.
pub fn path_distance(tour: &[usize], distances: &DistanceMatrix) -> f64 {
    let Some(&first) = tour.first() else {
        return 0.0;
    };
    let mut dist = distances.start().map_or(0.0, |s| distances.get(s, first));
    for pair in tour.windows(2) {
        dist += distances.get(pair[0], pair[1]);
    }
    dist
}
