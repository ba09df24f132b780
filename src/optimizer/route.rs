//! Turns a search tour into an [`OptimizationResult`].
//!
//! Every strategy funnels its tour through [`finish_route`], which owns stop
//! limit truncation, duration trimming, distance, duration, score and the
//! `locations_skipped` bookkeeping.

use crate::evaluation::TourEvaluator;
use crate::models::{
    Algorithm, Location, OptimizationConfig, OptimizationMetadata, OptimizationResult,
    OptimizedStop, RouteConstraints,
};

use super::scoring::route_score;

/// Builds the final result for `tour` (indices into `locations`).
///
/// The tour is cut to [`RouteConstraints::stop_limit`], then trailing stops
/// are dropped until the estimated duration fits `max_duration`.
/// Strategy-specific fields already set in `metadata` are kept.
pub(crate) fn finish_route(
    algorithm: Algorithm,
    locations: &[Location],
    mut tour: Vec<usize>,
    evaluator: &TourEvaluator<'_>,
    config: &OptimizationConfig,
    constraints: &RouteConstraints,
    mut metadata: OptimizationMetadata,
) -> OptimizationResult {
    let stop_limit = constraints.stop_limit();
    if tour.len() > stop_limit {
        tracing::warn!(
            stops = tour.len(),
            stop_limit,
            "Route truncated to stop limit"
        );
        tour.truncate(stop_limit);
    }

    if let Some(max_duration) = constraints.max_duration().filter(|d| !d.is_nan()) {
        let feasible = evaluator.duration_feasible_prefix(&tour, max_duration);
        if feasible < tour.len() {
            metadata.duration_trimmed = tour.len() - feasible;
            tracing::warn!(
                trimmed = metadata.duration_trimmed,
                max_duration,
                "Route trimmed to fit maximum duration"
            );
            tour.truncate(feasible);
        }
    }

    let total_distance = evaluator.distance(&tour);
    let estimated_duration = evaluator.duration_minutes(total_distance, tour.len());
    let optimization_score = route_score(
        tour.len(),
        locations.len(),
        total_distance,
        estimated_duration,
        config,
        constraints,
    );

    metadata.stop_limit = stop_limit;
    metadata.locations_skipped = locations.len().saturating_sub(tour.len());

    let optimized_stops = tour
        .iter()
        .enumerate()
        .map(|(sequence, &idx)| OptimizedStop::from_location(&locations[idx], sequence))
        .collect();

    OptimizationResult {
        algorithm,
        optimized_stops,
        total_distance,
        estimated_duration,
        optimization_score,
        metadata,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RouteSettings;
    use crate::distance::DistanceMatrix;

    fn row() -> Vec<Location> {
        (0..5)
            .map(|i| Location::new(format!("w{i}"), 0.0, i as f64 * 0.01))
            .collect()
    }

    fn finish(tour: Vec<usize>, constraints: &RouteConstraints) -> OptimizationResult {
        let locations = row();
        let dm = DistanceMatrix::from_locations(&locations, constraints.start_location());
        let settings = RouteSettings::default();
        let evaluator = TourEvaluator::new(&dm, &settings);
        let config = OptimizationConfig::new(Algorithm::Genetic, 10);
        finish_route(
            Algorithm::Genetic,
            &locations,
            tour,
            &evaluator,
            &config,
            constraints,
            OptimizationMetadata::default(),
        )
    }

    #[test]
    fn test_full_route() {
        let result = finish(vec![4, 3, 2, 1, 0], &RouteConstraints::new(10));
        assert_eq!(result.user_ids(), vec!["w4", "w3", "w2", "w1", "w0"]);
        assert_eq!(result.metadata.locations_skipped, 0);
        assert_eq!(result.metadata.stop_limit, 10);
        assert!(result.total_distance > 0.0);
        assert!(result.optimization_score > 0.0);
        for (i, stop) in result.optimized_stops.iter().enumerate() {
            assert_eq!(stop.sequence, i);
        }
    }

    #[test]
    fn test_truncates_to_capacity() {
        let constraints = RouteConstraints::new(10).with_vehicle_capacity(2);
        let result = finish(vec![0, 1, 2, 3, 4], &constraints);
        assert_eq!(result.user_ids(), vec!["w0", "w1"]);
        assert_eq!(result.metadata.locations_skipped, 3);
        assert_eq!(result.metadata.stop_limit, 2);
    }

    #[test]
    fn test_duration_trim() {
        // 2 minutes of service per stop; a ~1.1 km leg adds ~1.7 minutes.
        let constraints = RouteConstraints::new(10).with_max_duration(6.0);
        let result = finish(vec![0, 1, 2, 3, 4], &constraints);
        // Two stops take ~5.7 minutes, three take ~9.3.
        assert_eq!(result.len(), 2);
        assert_eq!(result.metadata.duration_trimmed, 3);
        assert_eq!(result.metadata.locations_skipped, 3);
        assert!(result.estimated_duration <= 6.0);
    }

    #[test]
    fn test_zero_stop_limit() {
        let result = finish(vec![0, 1, 2], &RouteConstraints::new(0));
        assert!(result.is_empty());
        assert_eq!(result.total_distance, 0.0);
        assert_eq!(result.optimization_score, 0.0);
        assert_eq!(result.metadata.locations_skipped, 5);
    }
}
