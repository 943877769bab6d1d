//! Activity and kill-count measurements built from state other plugins track.

use super::creator::{present, MeasurementCreator};
use crate::model::{Measurement, Series, SeriesName};
use crate::utils::config::{KILL_COUNT_CFG_PREFIX, PERSONAL_BEST_CFG_PREFIX};
use log::debug;
use serde::{Deserialize, Serialize};

/// Last known activity of the player
///
/// Each part may be unknown; empty strings count as unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityState {
    #[serde(default)]
    pub skill: Option<String>,

    #[serde(default)]
    pub location_type: Option<String>,

    #[serde(default)]
    pub location: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl MeasurementCreator<'_> {
    pub fn create_activity_series(&self) -> Option<Series> {
        present(self.series(SeriesName::Activity).build())
    }

    pub fn create_activity_measurement(&self, state: &ActivityState) -> Option<Measurement> {
        let mut builder = Measurement::builder(self.create_activity_series()?);
        if let Some(skill) = non_empty(state.skill.as_deref()) {
            builder = builder.string("skill", skill);
        }
        if let Some(location_type) = non_empty(state.location_type.as_deref()) {
            builder = builder.string("type", location_type);
        }
        if let Some(location) = non_empty(state.location.as_deref()) {
            builder = builder.string("location", location);
        }
        Self::finish(builder)
    }

    pub fn create_kill_count_series(&self, boss: &str) -> Option<Series> {
        present(self.series(SeriesName::KillCount).tag("boss", boss).build())
    }

    /// Kill count and personal best for a boss, as recorded by the chat
    /// commands plugin
    ///
    /// Boss names are matched case-insensitively. A boss never tracked for
    /// this user yields `None`; `pb` is only set when a personal best exists.
    pub fn create_kill_count_measurement(&self, boss: &str) -> Option<Measurement> {
        let user = self.client.username()?.to_lowercase();
        let boss = boss.to_lowercase();

        let Some(kill_count) = self
            .config_store
            .get_int(&format!("{}{}", KILL_COUNT_CFG_PREFIX, user), &boss)
        else {
            debug!("No kill count tracked for {}", boss);
            return None;
        };
        let personal_best = self
            .config_store
            .get_int(&format!("{}{}", PERSONAL_BEST_CFG_PREFIX, user), &boss);

        let mut builder =
            Measurement::builder(self.create_kill_count_series(&boss)?).numeric("kc", kill_count);
        if let Some(pb) = personal_best {
            builder = builder.numeric("pb", pb);
        }
        Self::finish(builder)
    }
}
