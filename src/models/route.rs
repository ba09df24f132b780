//! Optimized stop and route result types.

use serde::{Deserialize, Serialize};

use super::{Algorithm, Location};

/// A pickup in an optimized route.
///
/// `sequence` equals the stop's position in
/// [`OptimizationResult::optimized_stops`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedStop {
    /// Worker ID, equal to the originating [`Location::id`].
    pub user_id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Zero-based visiting position.
    pub sequence: usize,
}

impl OptimizedStop {
    /// Creates a stop at `sequence` from a pickup location.
    pub fn from_location(location: &Location, sequence: usize) -> Self {
        Self {
            user_id: location.id().to_string(),
            latitude: location.latitude(),
            longitude: location.longitude(),
            sequence,
        }
    }

    /// The stop's position as a [`Location`].
    pub fn location(&self) -> Location {
        Location::new(self.user_id.clone(), self.latitude, self.longitude)
    }
}

/// Diagnostics attached to an [`OptimizationResult`].
///
/// Algorithm-specific fields stay `None` (and are omitted from JSON) for
/// strategies that do not produce them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationMetadata {
    /// Input locations left out of the route.
    pub locations_skipped: usize,
    /// Effective stop limit applied (min of max stops and vehicle capacity).
    pub stop_limit: usize,
    /// Stops removed from the tail to satisfy the maximum trip duration.
    #[serde(default)]
    pub duration_trimmed: usize,
    /// A randomized strategy handed a small input to nearest-neighbor.
    #[serde(default)]
    pub fell_back_to_nearest_neighbor: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generations: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population_size: Option<usize>,
    /// Inverse tour cost of the best individual.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_fitness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<usize>,
    /// Temperature at which the last annealing move was judged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_moves: Option<usize>,
    /// The returned route is shorter than `initial_distance`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvement_found: Option<bool>,
    /// Distance (km) of the annealing seed tour, cut to the returned stop count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_distance: Option<f64>,
}

/// Outcome of ordering one vehicle's pickups.
///
/// # Examples
///
/// ```
/// use shuttle_routing::models::{Algorithm, OptimizationResult};
///
/// let empty = OptimizationResult::empty(Algorithm::NearestNeighbor);
/// assert!(empty.is_empty());
/// assert_eq!(empty.total_distance, 0.0);
/// assert_eq!(empty.optimization_score, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub algorithm: Algorithm,
    pub optimized_stops: Vec<OptimizedStop>,
    /// Route length in kilometers.
    pub total_distance: f64,
    /// Driving plus service time in minutes.
    pub estimated_duration: f64,
    pub optimization_score: f64,
    pub metadata: OptimizationMetadata,
}

impl OptimizationResult {
    /// A result with no stops.
    pub fn empty(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            optimized_stops: Vec::new(),
            total_distance: 0.0,
            estimated_duration: 0.0,
            optimization_score: 0.0,
            metadata: OptimizationMetadata::default(),
        }
    }

    /// Number of stops in the route.
    pub fn len(&self) -> usize {
        self.optimized_stops.len()
    }

    /// Returns `true` if the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.optimized_stops.is_empty()
    }

    /// Worker IDs in visiting order.
    pub fn user_ids(&self) -> Vec<&str> {
        self.optimized_stops
            .iter()
            .map(|s| s.user_id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_from_location() {
        let loc = Location::new("w-3", 12.5, 77.6);
        let stop = OptimizedStop::from_location(&loc, 2);
        assert_eq!(stop.user_id, "w-3");
        assert_eq!(stop.sequence, 2);
        assert_eq!(stop.location(), loc);
    }

    #[test]
    fn test_result_user_ids() {
        let mut result = OptimizationResult::empty(Algorithm::Genetic);
        result.optimized_stops = vec![
            OptimizedStop::from_location(&Location::new("b", 0.0, 0.0), 0),
            OptimizedStop::from_location(&Location::new("a", 0.0, 1.0), 1),
        ];
        assert_eq!(result.len(), 2);
        assert_eq!(result.user_ids(), vec!["b", "a"]);
    }

    #[test]
    fn test_metadata_omits_absent_fields() {
        let meta = OptimizationMetadata {
            locations_skipped: 2,
            stop_limit: 3,
            ..Default::default()
        };
        let json = serde_json::to_value(&meta).expect("serialize");
        assert_eq!(json["locationsSkipped"], 2);
        assert!(json.get("generations").is_none());
        assert!(json.get("finalTemperature").is_none());
    }
}
