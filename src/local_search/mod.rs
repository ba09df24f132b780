//! Local search operators for improving tours.
//!
//! - [`two_opt_improve`]: open-path 2-opt segment reversal

mod two_opt;

pub use two_opt::{path_distance, two_opt_improve};
