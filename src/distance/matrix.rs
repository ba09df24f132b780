//! Dense distance matrix.

use crate::models::Location;

/// A dense n×n great-circle distance matrix stored in row-major order.
///
/// Built from pickup locations, with an optional vehicle start point stored
/// at index `n` (after all pickups).
///
/// # Examples
///
/// ```
/// use shuttle_routing::models::Location;
/// use shuttle_routing::distance::DistanceMatrix;
///
/// let locations = vec![
///     Location::new("a", 0.0, 0.0),
///     Location::new("b", 0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations, None);
/// assert_eq!(dm.size(), 2);
/// assert!(dm.start().is_none());
/// assert!((dm.get(0, 1) - 111.195).abs() < 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
    start: Option<usize>,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
            start: None,
        }
    }

    /// Computes haversine distances between all pickups and the start point.
    pub fn from_locations(locations: &[Location], start: Option<&Location>) -> Self {
        let n = locations.len();
        let points: Vec<&Location> = locations.iter().chain(start).collect();
        let mut dm = Self::new(points.len());
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let d = points[i].distance_to(points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm.start = start.map(|_| n);
        dm
    }

    /// Returns the distance from point `from` to point `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from point `from` to point `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of points in this matrix, including the start point.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of pickup locations (excludes the start point).
    pub fn num_locations(&self) -> usize {
        match self.start {
            Some(_) => self.size - 1,
            None => self.size,
        }
    }

    /// Index of the vehicle start point, if one was supplied.
    pub fn start(&self) -> Option<usize> {
        self.start
    }

    /// Returns the nearest of `candidates` to `from`.
    ///
    /// Ties go to the earliest candidate; NaN distances rank last.
    /// Returns `None` if `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| rank(self.get(from, a)).total_cmp(&rank(self.get(from, b))))
    }
}

fn rank(distance: f64) -> f64 {
    if distance.is_nan() {
        f64::INFINITY
    } else {
        distance
    }
}
