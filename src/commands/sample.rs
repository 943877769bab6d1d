//! Sample command implementation.
//!
//! The sample command:
//! 1. Loads a snapshot bundle
//! 2. Builds every available measurement
//! 3. Writes the measurement batch
//! 4. Optionally prints a summary

use super::models::{SampleArgs, SnapshotBundle};
use crate::builder::MeasurementCreator;
use crate::model::Measurement;
use crate::output::{generate_text_summary, write_batch, MeasurementBatch};
use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

/// Execute the sample command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Snapshot file missing or malformed
/// * Output file write errors
pub fn execute_sample(args: SampleArgs) -> Result<MeasurementBatch> {
    let start_time = Instant::now();

    info!("Step 1/3: Loading snapshot from {}", args.snapshot.display());
    let bundle = load_bundle(&args.snapshot)?;

    if bundle.client.username().is_none() {
        warn!("Snapshot has no username, only user-independent records can be built");
    }

    info!("Step 2/3: Building measurements...");
    let batch = MeasurementBatch::new(sample_bundle(&bundle));

    info!("Step 3/3: Writing measurements...");
    write_batch(&batch, &args.output_json).context("Failed to write measurement batch")?;

    if args.print_summary {
        println!("{}", generate_text_summary(&batch));
    }

    info!(
        "Sampled {} measurements in {:.2?}",
        batch.measurements.len(),
        start_time.elapsed()
    );

    Ok(batch)
}

/// Run every builder over a loaded bundle
pub fn sample_bundle(bundle: &SnapshotBundle) -> Vec<Measurement> {
    let mut creator = MeasurementCreator::new(&bundle.client, &bundle.catalog, &bundle.config);
    if let Some(world_tags) = &bundle.world_tags {
        creator = creator.with_world_tags(world_tags.clone());
    }
    if let Some(valuation) = &bundle.valuation {
        creator = creator.with_valuation(valuation.clone());
    }
    if let Some(lms_regions) = &bundle.lms_regions {
        creator = creator.with_lms_regions(lms_regions.clone());
    }

    debug!("Catalog holds {} items", bundle.catalog.len());
    creator.sample(&bundle.request)
}

/// Load a snapshot bundle from a JSON file
fn load_bundle(path: &Path) -> Result<SnapshotBundle> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open snapshot {}", path.display()))?;
    let bundle: SnapshotBundle = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse snapshot {}", path.display()))?;
    Ok(bundle)
}

/// Validate sample arguments before execution
pub fn validate_args(args: &SampleArgs) -> Result<()> {
    if !args.snapshot.exists() {
        bail!("Snapshot file not found: {}", args.snapshot.display());
    }

    if args.output_json.as_os_str().is_empty() {
        bail!("Output path must not be empty");
    }

    Ok(())
}
