//! Human-readable summary of a measurement batch.

use super::json::MeasurementBatch;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Render a per-series overview of a batch
///
/// One line per series name with the number of measurements and the total
/// number of fields they carry.
pub fn generate_text_summary(batch: &MeasurementBatch) -> String {
    let mut per_series: BTreeMap<&'static str, (usize, usize)> = BTreeMap::new();
    for measurement in &batch.measurements {
        let entry = per_series
            .entry(measurement.series().name().as_str())
            .or_insert((0, 0));
        entry.0 += 1;
        entry.1 += measurement.field_count();
    }

    let mut output = String::new();
    let _ = writeln!(
        output,
        "Measurements: {} (schema v{})",
        batch.measurements.len(),
        batch.version
    );
    let _ = writeln!(output, "Sampled at: {}", batch.generated_at);
    for (name, (count, fields)) in per_series {
        let _ = writeln!(output, "  {:<14} {:>4} records {:>6} fields", name, count, fields);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Measurement, Series, SeriesName};

    #[test]
    fn test_summary_groups_by_series() {
        let series = Series::builder(SeriesName::KillCount)
            .tag("user", "zezima")
            .tag("boss", "zulrah")
            .build()
            .unwrap();
        let measurement = Measurement::builder(series)
            .numeric("kc", 10)
            .numeric("pb", 60)
            .build()
            .unwrap();
        let batch = MeasurementBatch::new(vec![measurement.clone(), measurement]);

        let summary = generate_text_summary(&batch);
        assert!(summary.contains("Measurements: 2"));
        assert!(summary.contains("rs_killcount"));
        assert!(summary.contains("4 fields"));
    }
}
