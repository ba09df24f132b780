//! Engine settings.
//!
//! [`EngineSettings`] gathers every tunable the dispatch service may set once
//! at startup: the travel-time model, ETA confidence model, and the GA and SA
//! parameters. Per-call knobs (algorithm, iteration budget, scoring flags)
//! live in [`OptimizationConfig`](crate::models::OptimizationConfig) instead.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::ga::GeneticSettings;
use crate::sa::AnnealingSettings;

/// Travel-time model used for route duration estimates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouteSettings {
    /// Assumed average driving speed in km/h.
    pub average_speed_kmh: f64,
    /// Time spent boarding passengers at each stop, in minutes.
    pub service_minutes_per_stop: f64,
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self {
            average_speed_kmh: 40.0,
            service_minutes_per_stop: 2.0,
        }
    }
}

impl RouteSettings {
    pub fn validate(&self) -> Result<(), Error> {
        positive("route.averageSpeedKmh", self.average_speed_kmh)?;
        non_negative("route.serviceMinutesPerStop", self.service_minutes_per_stop)
    }
}

/// Arrival-time model used by the ETA calculator.
///
/// Confidence at stop `i` is
/// `max(min_confidence, initial_confidence * confidence_decay^i)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EtaSettings {
    pub average_speed_kmh: f64,
    /// Dwell time at each stop, in minutes.
    pub stop_duration_minutes: f64,
    pub initial_confidence: f64,
    pub confidence_decay: f64,
    pub min_confidence: f64,
}

impl Default for EtaSettings {
    fn default() -> Self {
        Self {
            average_speed_kmh: 40.0,
            stop_duration_minutes: 2.0,
            initial_confidence: 0.95,
            confidence_decay: 0.97,
            min_confidence: 0.5,
        }
    }
}

impl EtaSettings {
    /// Rejects models whose confidence could leave `(0, 1]` or rise along
    /// the route.
    pub fn validate(&self) -> Result<(), Error> {
        positive("eta.averageSpeedKmh", self.average_speed_kmh)?;
        non_negative("eta.stopDurationMinutes", self.stop_duration_minutes)?;
        unit_interval("eta.initialConfidence", self.initial_confidence)?;
        unit_interval("eta.confidenceDecay", self.confidence_decay)?;
        unit_interval("eta.minConfidence", self.min_confidence)?;
        if self.min_confidence > self.initial_confidence {
            return Err(Error::InvalidSettings(
                "eta.minConfidence must not exceed eta.initialConfidence".into(),
            ));
        }
        Ok(())
    }
}

/// All engine tunables.
///
/// # Examples
///
/// ```
/// use shuttle_routing::config::EngineSettings;
///
/// let settings = EngineSettings::from_json(r#"{"seed": 7, "eta": {"averageSpeedKmh": 30.0}}"#)
///     .unwrap();
/// assert_eq!(settings.seed, Some(7));
/// assert_eq!(settings.eta.average_speed_kmh, 30.0);
/// assert_eq!(settings.eta.stop_duration_minutes, 2.0);
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineSettings {
    pub route: RouteSettings,
    pub eta: EtaSettings,
    pub genetic: GeneticSettings,
    pub annealing: AnnealingSettings,
    /// Seed for the randomized strategies. `None` draws a fresh seed per call.
    pub seed: Option<u64>,
}

impl EngineSettings {
    /// Parses settings from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_route(mut self, route: RouteSettings) -> Self {
        self.route = route;
        self
    }

    pub fn with_eta(mut self, eta: EtaSettings) -> Self {
        self.eta = eta;
        self
    }

    pub fn with_genetic(mut self, genetic: GeneticSettings) -> Self {
        self.genetic = genetic;
        self
    }

    pub fn with_annealing(mut self, annealing: AnnealingSettings) -> Self {
        self.annealing = annealing;
        self
    }

    /// Fixes the random seed so GA and SA runs are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates every section.
    ///
    /// Returns [`Error::InvalidSettings`] naming the first bad parameter.
    pub fn validate(&self) -> Result<(), Error> {
        self.route.validate()?;
        self.eta.validate()?;
        self.genetic
            .validate()
            .map_err(|e| Error::InvalidSettings(format!("genetic: {e}")))?;
        self.annealing
            .validate()
            .map_err(|e| Error::InvalidSettings(format!("annealing: {e}")))?;
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<(), Error> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidSettings(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

fn non_negative(name: &str, value: f64) -> Result<(), Error> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidSettings(format!(
            "{name} must be non-negative, got {value}"
        )))
    }
}

fn unit_interval(name: &str, value: f64) -> Result<(), Error> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(Error::InvalidSettings(format!(
            "{name} must be in (0, 1], got {value}"
        )))
    }
}
