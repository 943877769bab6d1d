//! RS Metrics
//!
//! Turns game-client state (inventories, skills, position, loot, kill
//! counts, activity) into named time-series measurements ready for a
//! metrics backend.
//!
//! ## Getting Started
//!
//! ```ignore
//! let creator = MeasurementCreator::new(&snapshot, &catalog, &config_store);
//! let measurements = creator.sample(&request);
//! ```
//!
//! The CLI wraps the same pipeline around JSON snapshot bundles:
//!
//! ```bash
//! rs-metrics sample --snapshot snapshot.json --output measurements.json
//! ```

pub mod builder;
pub mod client;
pub mod commands;
pub mod items;
pub mod model;
pub mod output;
pub mod utils;

pub use builder::MeasurementCreator;
pub use model::{Measurement, Series, SeriesName};
