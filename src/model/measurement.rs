//! A single sampled data point belonging to a series.

use super::series::Series;
use crate::utils::error::MeasurementError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Numeric field value
///
/// Integers stay integers so counts and prices survive serialization
/// without going through a float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    Integer(i64),
    Float(f64),
}

impl NumericValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Integer(v) => *v as f64,
            Self::Float(v) => *v,
        }
    }

    /// Integer view, `None` for float values
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::Float(_) => None,
        }
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for NumericValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for NumericValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<bool> for NumericValue {
    fn from(value: bool) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for NumericValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// One sample event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    series: Series,

    #[serde(default)]
    numeric_values: BTreeMap<String, NumericValue>,

    #[serde(default)]
    string_values: BTreeMap<String, String>,
}

impl Measurement {
    /// Start building a measurement for an already-valid series
    pub fn builder(series: Series) -> MeasurementBuilder {
        MeasurementBuilder {
            series,
            numeric_values: BTreeMap::new(),
            string_values: BTreeMap::new(),
        }
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn numeric_values(&self) -> &BTreeMap<String, NumericValue> {
        &self.numeric_values
    }

    pub fn string_values(&self) -> &BTreeMap<String, String> {
        &self.string_values
    }

    pub fn numeric(&self, key: &str) -> Option<NumericValue> {
        self.numeric_values.get(key).copied()
    }

    pub fn string(&self, key: &str) -> Option<&str> {
        self.string_values.get(key).map(String::as_str)
    }

    /// Total number of fields across both maps
    pub fn field_count(&self) -> usize {
        self.numeric_values.len() + self.string_values.len()
    }

    /// Check both model invariants (user tag present, at least one field)
    pub fn validate(&self) -> Result<(), MeasurementError> {
        self.series.validate()?;
        if self.field_count() == 0 {
            return Err(MeasurementError::NoFields(self.series.name().to_string()));
        }
        Ok(())
    }
}

/// Staged builder for [`Measurement`]
#[derive(Debug, Clone)]
pub struct MeasurementBuilder {
    series: Series,
    numeric_values: BTreeMap<String, NumericValue>,
    string_values: BTreeMap<String, String>,
}

impl MeasurementBuilder {
    /// Set a numeric field
    pub fn numeric(mut self, key: impl Into<String>, value: impl Into<NumericValue>) -> Self {
        self.numeric_values.insert(key.into(), value.into());
        self
    }

    /// Set several numeric fields
    pub fn numerics<K, V, I>(mut self, values: I) -> Self
    where
        K: Into<String>,
        V: Into<NumericValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in values {
            self.numeric_values.insert(key.into(), value.into());
        }
        self
    }

    /// Set a string field
    pub fn string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.string_values.insert(key.into(), value.into());
        self
    }

    /// Finish the measurement
    ///
    /// # Errors
    /// * `MeasurementError::NoFields` - neither numeric nor string fields were set
    pub fn build(self) -> Result<Measurement, MeasurementError> {
        let measurement = Measurement {
            series: self.series,
            numeric_values: self.numeric_values,
            string_values: self.string_values,
        };
        measurement.validate()?;
        Ok(measurement)
    }
}
