//! One-shot sampling: every builder run against a single snapshot.

use super::activity::ActivityState;
use super::creator::MeasurementCreator;
use super::inventory::InventoryId;
use super::location::LootEvent;
use crate::client::Skill;
use crate::items::ItemStack;
use crate::model::Measurement;
use log::debug;
use serde::{Deserialize, Serialize};

/// Contents of one container at sampling time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerContents {
    pub inventory: InventoryId,
    pub items: Vec<ItemStack>,
}

/// Event-driven inputs collected since the last sample
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRequest {
    #[serde(default)]
    pub containers: Vec<ContainerContents>,

    #[serde(default)]
    pub loot: Vec<LootEvent>,

    #[serde(default)]
    pub activity: Option<ActivityState>,

    /// Bosses whose kill count should be reported
    #[serde(default)]
    pub bosses: Vec<String>,
}

impl MeasurementCreator<'_> {
    /// Produce every measurement available from the snapshot
    ///
    /// **Public** - main entry point for sampling
    ///
    /// Records that are absent (zero experience, untracked boss, unknown
    /// position...) are simply not part of the output.
    pub fn sample(&self, request: &SampleRequest) -> Vec<Measurement> {
        let mut measurements: Vec<Measurement> = Skill::ALL
            .into_iter()
            .filter_map(|skill| self.create_xp_measurement(skill))
            .collect();

        measurements.extend(self.create_self_measurement());
        measurements.extend(self.create_self_loc_measurement());

        // Gear inside Last Man Standing is temporary
        if self.is_in_last_man_standing() {
            debug!("In Last Man Standing, skipping {} containers", request.containers.len());
        } else {
            for container in &request.containers {
                measurements
                    .extend(self.create_item_measurements(container.inventory, &container.items));
            }
        }

        measurements.extend(
            request
                .loot
                .iter()
                .filter_map(|event| self.create_loot_measurement(event)),
        );

        if let Some(state) = &request.activity {
            measurements.extend(self.create_activity_measurement(state));
        }

        measurements.extend(
            request
                .bosses
                .iter()
                .filter_map(|boss| self.create_kill_count_measurement(boss)),
        );

        debug!("Sampled {} measurements", measurements.len());
        measurements
    }
}
