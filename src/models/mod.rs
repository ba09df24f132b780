//! Domain model types for shuttle pickup routing.
//!
//! Locations and route constraints go in; ordered stops, arrival estimates
//! and capacity snapshots come out. Every value is transient and owned by a
//! single call.

mod constraints;
mod driver;
mod eta;
mod location;
mod route;

pub use constraints::{Algorithm, OptimizationConfig, RouteConstraints};
pub use driver::{DriverCapacity, VehicleType};
pub use eta::{EtaEntry, EtaFactors};
pub use location::Location;
pub use route::{OptimizationMetadata, OptimizationResult, OptimizedStop};
