//! Engine-level SA tuning and budget-fitted cooling.

use serde::{Deserialize, Serialize};
use u_metaheur::sa::{CoolingSchedule, SaConfig};

/// Cooling schedule shape.
///
/// Each shape is fitted to the iteration budget so the temperature falls
/// from `initial_temperature` toward `min_temperature` over exactly that
/// many moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cooling {
    /// `T_{k+1} = alpha * T_k` with `alpha = (T_min / T_0)^(1 / n)`.
    #[default]
    Geometric,
    /// `T_k = T_0 - k * (T_0 - T_min) / n`.
    Linear,
    /// `T_{k+1} = T_k / (1 + beta * T_k)` with `beta = (T_0 - T_min) / (n * T_0 * T_min)`.
    LundyMees,
}

/// SA parameters that stay fixed for the lifetime of an engine.
///
/// Temperatures are in units of tour cost (kilometers).
///
/// # Examples
///
/// ```
/// use shuttle_routing::sa::{AnnealingSettings, Cooling};
///
/// let settings = AnnealingSettings::default().with_cooling(Cooling::Linear);
/// let config = settings.to_sa_config(500, Some(3));
/// assert_eq!(config.max_iterations, 500);
/// assert_eq!(config.iterations_per_temperature, 1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnnealingSettings {
    pub initial_temperature: f64,
    /// Temperature the schedule approaches at the end of the budget.
    pub min_temperature: f64,
    pub cooling: Cooling,
}

impl Default for AnnealingSettings {
    fn default() -> Self {
        Self {
            initial_temperature: 5.0,
            min_temperature: 1e-3,
            cooling: Cooling::default(),
        }
    }
}

impl AnnealingSettings {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: Cooling) -> Self {
        self.cooling = cooling;
        self
    }

    /// Runner configuration for `iterations` moves, one per temperature step.
    ///
    /// The schedule is fitted to reach `min_temperature` one step after the
    /// budget, so the runner's `T > T_min` loop guard never ends a run early.
    pub fn to_sa_config(&self, iterations: usize, seed: Option<u64>) -> SaConfig {
        let n = iterations.max(1) as f64;
        let (t0, t_min) = (self.initial_temperature, self.min_temperature);
        let cooling = match self.cooling {
            Cooling::Geometric => CoolingSchedule::Geometric {
                alpha: (t_min / t0).powf(1.0 / n),
            },
            Cooling::Linear => CoolingSchedule::Linear,
            Cooling::LundyMees => CoolingSchedule::LundyMees {
                beta: (t0 - t_min) / (n * t0 * t_min),
            },
        };
        let config = SaConfig::default()
            .with_initial_temperature(t0)
            .with_min_temperature(t_min)
            .with_cooling(cooling)
            .with_iterations_per_temperature(1)
            .with_max_iterations(iterations);
        match seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.initial_temperature.is_finite() || !self.min_temperature.is_finite() {
            return Err("temperatures must be finite".into());
        }
        self.to_sa_config(1, None).validate()
    }
}
