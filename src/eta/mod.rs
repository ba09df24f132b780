//! Estimated arrival times along an ordered route.
//!
//! Each stop's arrival is the start time plus the driving time of every leg
//! up to it plus the dwell time at every earlier stop. Confidence decays
//! geometrically with the stop's position down to a floor.

mod calculator;

pub use calculator::EtaCalculator;
