//! Estimated arrival entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inputs that produced an [`EtaEntry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtaFactors {
    /// Cumulative distance from the route start to this stop, in km.
    pub distance: f64,
    /// Distance of the leg ending at this stop, in km.
    pub leg_distance: f64,
    /// Cumulative driving time to this stop, in minutes.
    pub travel_minutes: f64,
    /// Cumulative dwell time spent at earlier stops, in minutes.
    pub dwell_minutes: f64,
    pub average_speed_kmh: f64,
    /// Zero-based position of the stop in the route.
    pub stop_index: usize,
}

/// Estimated arrival at one stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EtaEntry {
    pub stop_id: String,
    pub estimated_arrival: DateTime<Utc>,
    /// In `(0, 1]`; never increases along a route.
    pub confidence: f64,
    pub factors: EtaFactors,
    pub calculated_at: DateTime<Utc>,
}
