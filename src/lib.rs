//! # shuttle-routing
//!
//! Pickup route optimization for a worker shuttle dispatch service.
//!
//! Given worker pickup locations and a vehicle's limits, the engine orders
//! the stops (nearest-neighbor, genetic algorithm or simulated annealing),
//! estimates arrival times with decaying confidence, and shapes driver
//! capacity snapshots.
//!
//! ## Modules
//!
//! - [`models`]: locations, constraints, results, ETA and capacity types
//! - [`distance`]: haversine distance and the precomputed distance matrix
//! - [`evaluation`]: open-path tour distance, duration and cost
//! - [`constructive`]: nearest-neighbor tour construction
//! - [`local_search`]: open-path 2-opt
//! - [`ga`]: tour problem and tuning for the `u-metaheur` genetic algorithm
//! - [`sa`]: tour problem and fitted cooling for `u-metaheur` simulated annealing
//! - [`optimizer`]: strategies, scoring and the [`RouteOptimizer`] façade
//! - [`eta`]: arrival time estimation
//! - [`capacity`]: driver capacity snapshots
//! - [`config`]: engine settings
//!
//! ## Example
//!
//! ```
//! use chrono::Utc;
//! use shuttle_routing::{EtaCalculator, RouteOptimizer};
//! use shuttle_routing::models::{Location, OptimizationConfig, RouteConstraints};
//!
//! let locations = vec![
//!     Location::new("w1", 12.9716, 77.5946),
//!     Location::new("w2", 12.9352, 77.6245),
//!     Location::new("w3", 12.9784, 77.6408),
//! ];
//! let route = RouteOptimizer::default()
//!     .optimize_route(
//!         &locations,
//!         &OptimizationConfig::named("simulated_annealing", 200),
//!         &RouteConstraints::new(10),
//!         None,
//!     )
//!     .unwrap();
//!
//! let etas = EtaCalculator::default().calculate_etas(&route.optimized_stops, Utc::now(), None, None);
//! assert_eq!(etas.len(), 3);
//! ```

pub mod capacity;
pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod eta;
pub mod evaluation;
pub mod ga;
pub mod local_search;
pub mod models;
pub mod optimizer;
pub mod sa;

pub use capacity::assess_driver_capacity;
pub use config::EngineSettings;
pub use error::Error;
pub use eta::EtaCalculator;
pub use optimizer::RouteOptimizer;
