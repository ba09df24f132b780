//! Tour evaluation: distance, duration, cost and constraint checks.

mod evaluator;

pub use evaluator::TourEvaluator;
