//! Series identity: a name plus a set of string tags.
//!
//! A series can only be obtained through [`SeriesBuilder::build`], which
//! refuses to produce one without a non-empty `user` tag.

use crate::utils::config::{
    SERIES_ACTIVITY, SERIES_INVENTORY, SERIES_KILL_COUNT, SERIES_LOOT, SERIES_SELF,
    SERIES_SELF_LOC, SERIES_SKILL, TAG_USER,
};
use crate::utils::error::MeasurementError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The fixed set of series this crate emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesName {
    #[serde(rename = "rs_inventory")]
    Inventory,
    #[serde(rename = "rs_skill")]
    Skill,
    #[serde(rename = "rs_self")]
    SelfStats,
    #[serde(rename = "rs_self_loc")]
    SelfLocation,
    #[serde(rename = "rs_killcount")]
    KillCount,
    #[serde(rename = "rs_activity")]
    Activity,
    #[serde(rename = "rs_loot")]
    Loot,
}

impl SeriesName {
    /// Backend name of the series
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inventory => SERIES_INVENTORY,
            Self::Skill => SERIES_SKILL,
            Self::SelfStats => SERIES_SELF,
            Self::SelfLocation => SERIES_SELF_LOC,
            Self::KillCount => SERIES_KILL_COUNT,
            Self::Activity => SERIES_ACTIVITY,
            Self::Loot => SERIES_LOOT,
        }
    }
}

impl fmt::Display for SeriesName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a measurement stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    name: SeriesName,
    tags: BTreeMap<String, String>,
}

impl Series {
    /// Start building a series with the given name
    pub fn builder(name: SeriesName) -> SeriesBuilder {
        SeriesBuilder {
            name,
            tags: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> SeriesName {
        self.name
    }

    pub fn tags(&self) -> &BTreeMap<String, String> {
        &self.tags
    }

    /// Look up a single tag value
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// The player identity this series belongs to
    pub fn user(&self) -> &str {
        self.tag(TAG_USER).unwrap_or_default()
    }

    /// Check the non-empty user invariant
    ///
    /// Builders already enforce this; deserialized values are re-checked
    /// through here.
    pub fn validate(&self) -> Result<(), MeasurementError> {
        if self.user().is_empty() {
            return Err(MeasurementError::MissingUser(self.name.to_string()));
        }
        Ok(())
    }
}

/// Staged builder for [`Series`]
#[derive(Debug, Clone)]
pub struct SeriesBuilder {
    name: SeriesName,
    tags: BTreeMap<String, String>,
}

impl SeriesBuilder {
    /// Add one tag, rendering the value as a string
    ///
    /// A later tag with the same key replaces the earlier one.
    pub fn tag(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.tags.insert(key.into(), value.to_string());
        self
    }

    /// Add several tags at once
    pub fn tags<K, V, I>(mut self, tags: I) -> Self
    where
        K: Into<String>,
        V: ToString,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in tags {
            self.tags.insert(key.into(), value.to_string());
        }
        self
    }

    /// Finish the series
    ///
    /// # Errors
    /// * `MeasurementError::MissingUser` - no `user` tag, or an empty one
    pub fn build(self) -> Result<Series, MeasurementError> {
        let series = Series {
            name: self.name,
            tags: self.tags,
        };
        series.validate()?;
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_user() {
        let series = Series::builder(SeriesName::Skill)
            .tag("user", "zezima")
            .tag("skill", "ATTACK")
            .build()
            .unwrap();

        assert_eq!(series.name(), SeriesName::Skill);
        assert_eq!(series.user(), "zezima");
        assert_eq!(series.tag("skill"), Some("ATTACK"));
    }

    #[test]
    fn test_missing_user_rejected() {
        let result = Series::builder(SeriesName::Activity).build();
        assert_eq!(
            result,
            Err(MeasurementError::MissingUser("rs_activity".to_string()))
        );
    }

    #[test]
    fn test_empty_user_rejected() {
        let result = Series::builder(SeriesName::Loot).tag("user", "").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_numeric_tag_rendered_as_decimal() {
        let series = Series::builder(SeriesName::Loot)
            .tag("user", "zezima")
            .tag("combat", 725)
            .build()
            .unwrap();
        assert_eq!(series.tag("combat"), Some("725"));
    }

    #[test]
    fn test_series_name_serializes_to_backend_name() {
        let json = serde_json::to_string(&SeriesName::SelfLocation).unwrap();
        assert_eq!(json, "\"rs_self_loc\"");
    }
}
