//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod models;
pub mod sample;
pub mod utils;

// Re-export main command functions
pub use models::{SampleArgs, SnapshotBundle};
pub use sample::{execute_sample, sample_bundle, validate_args};
pub use utils::{display_schema, display_version, validate_batch_file};
