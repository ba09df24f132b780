//! Error types for the routing engine.

/// Errors returned by the routing engine.
///
/// Degenerate route data (no locations, a zero stop limit, duplicate or
/// extreme coordinates) never produces an error. Settings errors surface
/// when an engine or calculator is built, not per call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unsupported optimization algorithm: {0}")]
    UnsupportedAlgorithm(String),
    #[error("Invalid engine settings: {0}")]
    InvalidSettings(String),
    #[error("Settings format error: {0}")]
    SettingsFormat(#[from] serde_json::Error),
    /// The metaheuristic runner rejected the configuration derived for this
    /// call's iteration budget.
    #[error("Search configuration rejected: {0}")]
    Search(String),
}
