//! Time-series data model: series identity and measurements.
//!
//! Both types are immutable once built. Their builders are the only way to
//! construct them and enforce:
//! - a series always carries a non-empty `user` tag
//! - a measurement always carries at least one field

pub mod measurement;
pub mod series;

// Re-export main types
pub use measurement::{Measurement, MeasurementBuilder, NumericValue};
pub use series::{Series, SeriesBuilder, SeriesName};
