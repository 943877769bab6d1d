//! JSON measurement batch writer.
//!
//! Writes sampled measurements to JSON files with proper formatting and
//! reads them back with the model invariants re-checked.

use crate::model::Measurement;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Top-level structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementBatch {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the batch was sampled
    pub generated_at: String,

    pub measurements: Vec<Measurement>,
}

impl MeasurementBatch {
    /// Wrap measurements with the current schema version and time
    pub fn new(measurements: Vec<Measurement>) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            measurements,
        }
    }

    /// Check every measurement against the model invariants
    pub fn validate(&self) -> Result<(), OutputError> {
        for measurement in &self.measurements {
            measurement.validate()?;
        }
        Ok(())
    }
}

/// Write a batch to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `batch` - Measurements to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::Io` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_batch(
    batch: &MeasurementBatch,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {} measurements to: {}", batch.measurements.len(), output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, batch)?;
    // Surface errors from the buffered tail instead of losing them on drop
    writer.flush()?;

    Ok(())
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Read a batch from a JSON file
///
/// # Errors
/// * `OutputError::Io` - File read error
/// * `OutputError::SerializationFailed` - JSON parse error
/// * `OutputError::InvalidMeasurement` - A measurement breaks a model invariant
pub fn read_batch(input_path: impl AsRef<Path>) -> Result<MeasurementBatch, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading measurements from: {}", input_path.display());

    let file = File::open(input_path)?;
    let batch: MeasurementBatch = serde_json::from_reader(file)?;
    batch.validate()?;

    debug!(
        "Batch loaded: version {}, {} measurements",
        batch.version,
        batch.measurements.len()
    );

    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Series, SeriesName};
    use tempfile::NamedTempFile;

    fn create_test_batch() -> MeasurementBatch {
        let series = Series::builder(SeriesName::Skill)
            .tag("user", "zezima")
            .tag("skill", "ATTACK")
            .build()
            .unwrap();
        let measurement = Measurement::builder(series)
            .numeric("xp", 13_034_431)
            .numeric("realLevel", 99)
            .build()
            .unwrap();
        MeasurementBatch::new(vec![measurement])
    }

    #[test]
    fn test_write_and_read_batch() {
        let batch = create_test_batch();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        write_batch(&batch, path).unwrap();
        let loaded = read_batch(path).unwrap();

        assert_eq!(loaded, batch);
    }

    #[test]
    fn test_validate_output_path_empty() {
        let result = validate_output_path(Path::new(""));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = validate_output_path(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/measurements.json");

        write_batch(&create_test_batch(), &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_write_reports_failed_flush() {
        // every write to /dev/full fails with ENOSPC; a small batch only
        // reaches the device when the buffer is flushed
        let path = Path::new("/dev/full");
        if !path.exists() {
            return;
        }

        let result = write_batch(&create_test_batch(), path);
        assert!(matches!(result, Err(OutputError::Io(_))));
    }

    #[test]
    fn test_read_rejects_empty_user() {
        let temp_file = NamedTempFile::new().unwrap();
        let json = r#"{
            "version": "1.0.0",
            "generated_at": "2024-01-01T00:00:00Z",
            "measurements": [{
                "series": { "name": "rs_self", "tags": { "user": "" } },
                "numeric_values": { "questPoints": 1 }
            }]
        }"#;
        std::fs::write(temp_file.path(), json).unwrap();

        let result = read_batch(temp_file.path());
        assert!(matches!(result, Err(OutputError::InvalidMeasurement(_))));
    }
}
