//! Player position and loot event measurements.

use super::creator::{present, MeasurementCreator};
use crate::client::LocalPoint;
use crate::items::{IdentityResolver, ItemStack};
use crate::model::{Measurement, Series, SeriesName};
use crate::utils::config::{FIELD_LOC_X, FIELD_LOC_Y, FIELD_PLANE};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What produced a loot drop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LootRecordType {
    Npc,
    Player,
    Event,
    Pickpocket,
    Unknown,
}

impl LootRecordType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Npc => "NPC",
            Self::Player => "PLAYER",
            Self::Event => "EVENT",
            Self::Pickpocket => "PICKPOCKET",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// One dropped stack, with the tile it landed on if known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootStack {
    pub id: i32,
    pub quantity: i64,

    #[serde(default)]
    pub location: Option<LocalPoint>,
}

impl LootStack {
    fn item(&self) -> ItemStack {
        ItemStack::new(self.id, self.quantity)
    }
}

/// A loot drop as reported by the loot tracker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootEvent {
    pub record_type: LootRecordType,

    /// Display name of the source (NPC name, event name...)
    pub name: String,

    #[serde(default)]
    pub combat_level: i32,

    pub items: Vec<LootStack>,
}

impl MeasurementCreator<'_> {
    pub fn create_self_loc_series(&self) -> Option<Series> {
        present(self.series(SeriesName::SelfLocation).build())
    }

    /// Current world position of the player
    ///
    /// Returns `None` without a local player or when its tile cannot be
    /// resolved.
    pub fn create_self_loc_measurement(&self) -> Option<Measurement> {
        let local = self.client.local_player.as_ref()?;
        let Some(location) = self.client.to_world(local.location) else {
            debug!("Player tile {:?} not resolvable", local.location);
            return None;
        };

        Self::finish(
            Measurement::builder(self.create_self_loc_series()?)
                .numeric(FIELD_LOC_X, location.x)
                .numeric(FIELD_LOC_Y, location.y)
                .numeric(FIELD_PLANE, location.plane)
                .numeric("instance", self.client.is_in_instanced_region()),
        )
    }

    pub fn create_loot_series(
        &self,
        record_type: LootRecordType,
        source: &str,
        combat_level: i32,
    ) -> Option<Series> {
        present(
            self.series(SeriesName::Loot)
                .tag("type", record_type.name())
                .tag("source", source)
                .tag("combat", combat_level)
                .build(),
        )
    }

    /// Loot drop sample with per-item quantities
    ///
    /// The drop position comes from the first stack whose tile resolves;
    /// with none resolvable, or no countable stack, there is no record.
    /// `killcount` is always 1 so the backend can count drops over time.
    pub fn create_loot_measurement(&self, event: &LootEvent) -> Option<Measurement> {
        let Some(location) = event
            .items
            .iter()
            .filter_map(|stack| stack.location)
            .find_map(|tile| self.client.to_world(tile))
        else {
            debug!("No resolvable position in loot from {}", event.name);
            return None;
        };

        let resolver = IdentityResolver::new(self.catalog, &self.valuation.blocked_ids);
        let mut counts: BTreeMap<String, i64> = BTreeMap::new();
        for item in event.items.iter().filter_map(|stack| resolver.resolve(&stack.item())) {
            let count = counts.entry(item.key).or_insert(0);
            *count = count.saturating_add(item.quantity);
        }
        if counts.is_empty() {
            debug!("Loot from {} has no countable items", event.name);
            return None;
        }

        let series = self.create_loot_series(event.record_type, &event.name, event.combat_level)?;
        Self::finish(
            Measurement::builder(series)
                .numeric(FIELD_LOC_X, location.x)
                .numeric(FIELD_LOC_Y, location.y)
                .numeric(FIELD_PLANE, location.plane)
                .numeric("killcount", 1)
                .numerics(counts),
        )
    }
}
