//! Reduction of a station's observation series to one [`crate::StationSummary`].

pub mod aggregator;
pub mod circular;
pub mod mode;
