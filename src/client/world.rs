//! World flags and the table that turns them into series tags.

use crate::utils::config::LMS_REGION_IDS;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Flags a game world can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorldType {
    Members,
    Pvp,
    Bounty,
    SkillTotal,
    HighRisk,
    LastManStanding,
    Tournament,
    Deadman,
    Seasonal,
    League,
    FreshStartWorld,
    NoSaveMode,
    QuestSpeedrunning,
}

/// One world flag mapped to the tag key it produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldTagEntry {
    pub world_type: WorldType,
    pub tag: String,
}

/// Mapping from world flags to descriptive tags
///
/// Every flag present on the current world that has an entry here becomes a
/// `<tag>=true` series tag. Flags without an entry produce nothing, so the
/// table can grow as the flag set grows without touching the builders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorldTagTable {
    entries: Vec<WorldTagEntry>,
}

impl WorldTagTable {
    pub fn new(entries: Vec<WorldTagEntry>) -> Self {
        Self { entries }
    }

    /// Tags for a world with the given flags, in table order
    pub fn tags_for_world(&self, world: &HashSet<WorldType>) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter(|entry| world.contains(&entry.world_type))
            .map(|entry| (entry.tag.clone(), "true".to_string()))
            .collect()
    }
}

impl Default for WorldTagTable {
    fn default() -> Self {
        let entries = [
            (WorldType::League, "league"),
            (WorldType::Seasonal, "seasonal"),
            (WorldType::Deadman, "deadman"),
            (WorldType::Pvp, "pvp"),
            (WorldType::HighRisk, "high_risk"),
            (WorldType::LastManStanding, "last_man_standing"),
            (WorldType::Tournament, "tournament"),
            (WorldType::Bounty, "bounty"),
            (WorldType::Members, "members"),
        ]
        .into_iter()
        .map(|(world_type, tag)| WorldTagEntry {
            world_type,
            tag: tag.to_string(),
        })
        .collect();

        Self { entries }
    }
}

/// Map regions hosting a minigame, by region id
///
/// Defaults to the Last Man Standing arenas. Loaded from the snapshot bundle
/// when the arena layout changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionSet {
    regions: BTreeSet<i32>,
}

impl RegionSet {
    pub fn new(regions: impl IntoIterator<Item = i32>) -> Self {
        Self {
            regions: regions.into_iter().collect(),
        }
    }

    pub fn contains(&self, region_id: i32) -> bool {
        self.regions.contains(&region_id)
    }
}

impl Default for RegionSet {
    fn default() -> Self {
        Self::new(LMS_REGION_IDS)
    }
}
