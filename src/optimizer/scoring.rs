//! Route quality score.

use crate::models::{OptimizationConfig, RouteConstraints};

/// Scores a finished route in `[0, 100]`.
///
/// The score is `coverage × weighted_mean(distance, on_time, load)`:
///
/// | term      | value                               | weight                          |
/// |-----------|-------------------------------------|---------------------------------|
/// | distance  | `100 / (1 + km)`                    | 1, or 2 with `minimize_distance` |
/// | on-time   | `100 / (1 + minutes / 60)`          | 0.5, or 1 with `prioritize_pickup_time` |
/// | load      | `100 × stops / capacity`            | 0.5, or 1 with `balance_load`   |
///
/// `capacity` is the vehicle capacity, or the input size without one.
/// `coverage` is `stops / input_len`. An empty route scores zero; any
/// route with a stop scores above zero.
///
/// # Examples
///
/// ```
/// use shuttle_routing::models::{Algorithm, OptimizationConfig, RouteConstraints};
/// use shuttle_routing::optimizer::route_score;
///
/// let config = OptimizationConfig::new(Algorithm::NearestNeighbor, 100);
/// let constraints = RouteConstraints::new(10);
///
/// let short = route_score(4, 4, 3.0, 12.5, &config, &constraints);
/// let long = route_score(4, 4, 9.0, 21.5, &config, &constraints);
/// assert!(short > long);
/// assert_eq!(route_score(0, 4, 0.0, 0.0, &config, &constraints), 0.0);
/// ```
pub fn route_score(
    stops: usize,
    input_len: usize,
    total_distance: f64,
    estimated_duration: f64,
    config: &OptimizationConfig,
    constraints: &RouteConstraints,
) -> f64 {
    if stops == 0 || input_len == 0 {
        return 0.0;
    }

    let capacity = constraints
        .vehicle_capacity()
        .unwrap_or(input_len)
        .max(stops);

    let distance_term = 100.0 / (1.0 + or_worst(total_distance));
    let on_time_term = 100.0 / (1.0 + or_worst(estimated_duration) / 60.0);
    let load_term = 100.0 * stops as f64 / capacity as f64;

    let distance_weight = if config.minimize_distance { 2.0 } else { 1.0 };
    let on_time_weight = if config.prioritize_pickup_time { 1.0 } else { 0.5 };
    let load_weight = if config.balance_load { 1.0 } else { 0.5 };

    let weighted = (distance_weight * distance_term
        + on_time_weight * on_time_term
        + load_weight * load_term)
        / (distance_weight + on_time_weight + load_weight);

    let coverage = stops as f64 / input_len as f64;
    coverage.min(1.0) * weighted
}

/// NaN, infinite and negative measurements (from NaN coordinates) count as
/// unbounded, so their term contributes nothing.
fn or_worst(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        f64::INFINITY
    }
}
