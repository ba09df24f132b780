//! Simulated Annealing for pickup ordering.
//!
//! Plugs visiting-order tours into [`u_metaheur::sa`]: the search starts
//! from the nearest-neighbor tour, proposes segment reversals, and cools on
//! a schedule fitted to the caller's iteration budget.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod problem;
mod settings;

pub use problem::TourSaProblem;
pub use settings::{AnnealingSettings, Cooling};
