//! Genetic algorithm for pickup ordering.
//!
//! Plugs visiting-order tours into the generic GA framework of
//! [`u_metaheur::ga`]:
//!
//! - [`Tour`]: visiting-order chromosome
//! - [`TourGaProblem`]: initialization, OX crossover, swap mutation, evaluation
//! - [`GeneticSettings`]: engine-wide GA tuning
//!
//! # Reference
//!
//! Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod chromosome;
mod problem;
mod settings;

pub use chromosome::Tour;
pub use problem::TourGaProblem;
pub use settings::{GeneticSettings, ParentSelection};
