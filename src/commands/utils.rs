use crate::output::read_batch;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::Path;

/// Validate a measurement batch file
pub fn validate_batch_file(file_path: &Path) -> Result<()> {
    println!("Validating measurements: {}", file_path.display());

    let batch = read_batch(file_path)?;

    println!("✓ Valid measurement batch");
    println!("  Version: {}", batch.version);
    println!("  Generated: {}", batch.generated_at);
    println!("  Measurements: {}", batch.measurements.len());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("RS Metrics Measurement Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string          - Schema version (e.g., '1.0.0')");
        println!("  generated_at: string     - ISO 8601 timestamp");
        println!("  measurements: array      - Sampled data points");
        println!("    series: object         - Series identity");
        println!("      name: string         - rs_inventory, rs_skill, rs_self, rs_self_loc,");
        println!("                             rs_killcount, rs_activity or rs_loot");
        println!("      tags: object         - Tag values, always including a non-empty user");
        println!("    numeric_values: object - Integer or float fields");
        println!("    string_values: object  - String fields");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("RS Metrics v{}", env!("CARGO_PKG_VERSION"));
    println!("Measurement Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Turns game-client snapshots into time-series measurements.");
}
