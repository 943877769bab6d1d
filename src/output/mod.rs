//! Output writers for sampled measurements.
//!
//! This module handles:
//! - JSON measurement batches (write and validated read)
//! - Text summaries

pub mod json;
pub mod summary;

// Re-export main functions
pub use json::{read_batch, write_batch, MeasurementBatch};
pub use summary::generate_text_summary;
