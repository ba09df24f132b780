//! ETA calculator.

use chrono::{DateTime, TimeDelta, Utc};
use tracing::instrument;

use crate::config::EtaSettings;
use crate::distance::haversine_km;
use crate::error::Error;
use crate::models::{EtaEntry, EtaFactors, Location, OptimizedStop};

/// Gap forced between arrivals whose offsets tie (co-located stops with no
/// dwell), in nanoseconds.
const TIE_BREAK_NS: i64 = 1;

/// Computes arrival estimates for a route's stops.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use shuttle_routing::eta::EtaCalculator;
/// use shuttle_routing::models::{Location, OptimizedStop};
///
/// let stops = vec![
///     OptimizedStop::from_location(&Location::new("a", 0.0, 0.0), 0),
///     OptimizedStop::from_location(&Location::new("b", 0.0, 0.1), 1),
/// ];
/// let start = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
///
/// let etas = EtaCalculator::default().calculate_etas(&stops, start, None, None);
/// assert_eq!(etas[0].estimated_arrival, start);
/// assert!(etas[1].estimated_arrival > start);
/// assert!(etas[1].confidence <= etas[0].confidence);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EtaCalculator {
    settings: EtaSettings,
}

impl EtaCalculator {
    /// Creates a calculator, rejecting a travel model or confidence model
    /// that could break arrival ordering or confidence bounds.
    pub fn new(settings: EtaSettings) -> Result<Self, Error> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &EtaSettings {
        &self.settings
    }

    /// Estimates arrivals with the first stop reached at `start_time`.
    ///
    /// `average_speed_kmh` and `stop_duration_minutes` override the
    /// configured defaults. A speed that is not positive and finite, or a
    /// dwell time that is negative or not finite, falls back to the default.
    pub fn calculate_etas(
        &self,
        stops: &[OptimizedStop],
        start_time: DateTime<Utc>,
        average_speed_kmh: Option<f64>,
        stop_duration_minutes: Option<f64>,
    ) -> Vec<EtaEntry> {
        self.calculate_etas_from(
            stops,
            start_time,
            None,
            average_speed_kmh,
            stop_duration_minutes,
        )
    }

    /// Like [`calculate_etas`](Self::calculate_etas), but the vehicle leaves
    /// `origin` at `start_time`, so the first stop adds one driving leg.
    #[instrument(level = "debug", skip_all, fields(stops = stops.len()))]
    pub fn calculate_etas_from(
        &self,
        stops: &[OptimizedStop],
        start_time: DateTime<Utc>,
        origin: Option<&Location>,
        average_speed_kmh: Option<f64>,
        stop_duration_minutes: Option<f64>,
    ) -> Vec<EtaEntry> {
        let speed = average_speed_kmh
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(self.settings.average_speed_kmh);
        let dwell = stop_duration_minutes
            .filter(|d| d.is_finite() && *d >= 0.0)
            .unwrap_or(self.settings.stop_duration_minutes);

        let calculated_at = Utc::now();
        let mut entries = Vec::with_capacity(stops.len());
        let mut prev: Option<Location> = origin.cloned();
        let mut distance = 0.0;
        let mut travel_minutes = 0.0;
        let mut prev_offset_ns: Option<i64> = None;

        for (index, stop) in stops.iter().enumerate() {
            let here = stop.location();
            let leg_distance = prev.as_ref().map_or(0.0, |p| haversine_km(p, &here));
            distance += leg_distance;
            travel_minutes += leg_distance / speed * 60.0;
            let dwell_minutes = index as f64 * dwell;

            let mut offset_ns = minutes_to_ns(travel_minutes + dwell_minutes);
            if let Some(prev_ns) = prev_offset_ns {
                offset_ns = offset_ns.max(prev_ns.saturating_add(TIE_BREAK_NS));
            }
            prev_offset_ns = Some(offset_ns);

            entries.push(EtaEntry {
                stop_id: stop.user_id.clone(),
                estimated_arrival: add_ns(start_time, offset_ns),
                confidence: self.confidence(index),
                factors: EtaFactors {
                    distance,
                    leg_distance,
                    travel_minutes,
                    dwell_minutes,
                    average_speed_kmh: speed,
                    stop_index: index,
                },
                calculated_at,
            });
            prev = Some(here);
        }

        tracing::debug!(
            total_distance = distance,
            speed,
            dwell,
            "ETAs calculated"
        );
        entries
    }

    /// Confidence for the stop at `index`: `max(min, initial × decay^index)`.
    pub fn confidence(&self, index: usize) -> f64 {
        let exponent = i32::try_from(index).unwrap_or(i32::MAX);
        let decayed =
            self.settings.initial_confidence * self.settings.confidence_decay.powi(exponent);
        decayed.max(self.settings.min_confidence)
    }
}

/// Rounds minutes to whole nanoseconds. Non-finite values count as zero.
fn minutes_to_ns(minutes: f64) -> i64 {
    if minutes.is_finite() {
        // `as` saturates at the i64 bounds.
        (minutes * 60_000_000_000.0).round() as i64
    } else {
        0
    }
}

/// Adds `ns` to `start`, saturating at the latest representable instant.
fn add_ns(start: DateTime<Utc>, ns: i64) -> DateTime<Utc> {
    start
        .checked_add_signed(TimeDelta::nanoseconds(ns))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
