//! Engine-level GA tuning.

use serde::{Deserialize, Serialize};
use u_metaheur::ga::{GaConfig, Selection};

/// Parent selection, as named in settings files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentSelection {
    /// Best of `k` random individuals.
    Tournament(usize),
    Roulette,
    Rank,
}

impl Default for ParentSelection {
    fn default() -> Self {
        ParentSelection::Tournament(3)
    }
}

impl From<ParentSelection> for Selection {
    fn from(selection: ParentSelection) -> Self {
        match selection {
            ParentSelection::Tournament(k) => Selection::Tournament(k),
            ParentSelection::Roulette => Selection::Roulette,
            ParentSelection::Rank => Selection::Rank,
        }
    }
}

/// GA parameters that stay fixed for the lifetime of an engine.
///
/// The generation count and seed are per call; [`to_ga_config`](Self::to_ga_config)
/// combines both into a runner configuration that evolves for exactly the
/// requested number of generations.
///
/// # Examples
///
/// ```
/// use shuttle_routing::ga::{GeneticSettings, ParentSelection};
///
/// let settings = GeneticSettings::default()
///     .with_population_size(30)
///     .with_selection(ParentSelection::Rank);
/// assert!(settings.validate().is_ok());
///
/// let config = settings.to_ga_config(40, Some(7));
/// assert_eq!(config.max_generations, 40);
/// assert_eq!(config.stagnation_limit, 0);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneticSettings {
    pub population_size: usize,
    pub selection: ParentSelection,
    /// Fraction of the population copied unchanged into the next generation.
    pub elite_ratio: f64,
    pub crossover_rate: f64,
    pub mutation_rate: f64,
    /// Run open-path 2-opt on the best tour after evolution.
    pub two_opt_polish: bool,
}

impl Default for GeneticSettings {
    fn default() -> Self {
        Self {
            population_size: 50,
            selection: ParentSelection::default(),
            elite_ratio: 0.1,
            crossover_rate: 0.9,
            mutation_rate: 0.05,
            two_opt_polish: true,
        }
    }
}

impl GeneticSettings {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_selection(mut self, selection: ParentSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio;
        self
    }

    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn with_two_opt_polish(mut self, on: bool) -> Self {
        self.two_opt_polish = on;
        self
    }

    /// Runner configuration for `generations` generations.
    ///
    /// Stagnation stopping and the wall-clock limit stay off so the run
    /// length depends only on `generations`.
    pub fn to_ga_config(&self, generations: usize, seed: Option<u64>) -> GaConfig {
        let config = GaConfig::default()
            .with_population_size(self.population_size)
            .with_max_generations(generations)
            .with_selection(self.selection.into())
            .with_elite_ratio(self.elite_ratio)
            .with_crossover_rate(self.crossover_rate)
            .with_mutation_rate(self.mutation_rate)
            .with_stagnation_limit(0)
            .with_parallel(false);
        match seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    /// Checks the rates and the population layout the runner requires.
    pub fn validate(&self) -> Result<(), String> {
        for (name, rate) in [
            ("eliteRatio", self.elite_ratio),
            ("crossoverRate", self.crossover_rate),
            ("mutationRate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(format!("{name} must be in [0, 1], got {rate}"));
            }
        }
        if self.selection == ParentSelection::Tournament(0) {
            return Err("tournament size must be at least 1".into());
        }
        self.to_ga_config(1, None).validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        let settings = GeneticSettings::default();
        assert_eq!(settings.population_size, 50);
        assert!(settings.two_opt_polish);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_runner_config_runs_fixed_generations() {
        let config = GeneticSettings::default()
            .with_mutation_rate(0.2)
            .to_ga_config(75, None);
        assert_eq!(config.population_size, 50);
        assert_eq!(config.max_generations, 75);
        assert_eq!(config.stagnation_limit, 0);
        assert!(config.time_limit_ms.is_none());
        assert!(config.seed.is_none());
        assert_eq!(config.selection, Selection::Tournament(3));
        assert!((config.mutation_rate - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_validate_population_too_small() {
        let err = GeneticSettings::default()
            .with_population_size(1)
            .validate()
            .unwrap_err();
        assert!(err.contains("population_size"), "{err}");
    }

    #[test]
    fn test_validate_needs_an_elite() {
        // 5 × 0.1 rounds down to zero elites.
        let settings = GeneticSettings::default().with_population_size(5);
        assert!(settings.validate().is_err());
        assert!(settings.with_elite_ratio(0.2).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_rates() {
        assert!(GeneticSettings::default()
            .with_mutation_rate(1.5)
            .validate()
            .is_err());
        assert!(GeneticSettings::default()
            .with_crossover_rate(f64::NAN)
            .validate()
            .is_err());
        assert!(GeneticSettings::default()
            .with_selection(ParentSelection::Tournament(0))
            .validate()
            .is_err());
    }

    #[test]
    fn test_serde_selection_names() {
        let settings: GeneticSettings =
            serde_json::from_str(r#"{"selection": {"tournament": 5}, "populationSize": 20}"#)
                .expect("valid");
        assert_eq!(settings.selection, ParentSelection::Tournament(5));
        assert_eq!(settings.population_size, 20);
        let settings: GeneticSettings =
            serde_json::from_str(r#"{"selection": "rank"}"#).expect("valid");
        assert_eq!(Selection::from(settings.selection), Selection::Rank);
    }
}
