//! Great-circle distances.
//!
//! Provides the haversine distance and a dense distance matrix over a set of
//! pickups plus an optional start point.

mod haversine;
mod matrix;

pub use haversine::{haversine_coords, haversine_km, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
