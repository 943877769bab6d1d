//! Read-only snapshot of game-client state at sampling time.

use super::coords::{LocalPoint, Scene, WorldPoint};
use super::skill::Skill;
use super::world::WorldType;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Experience and unboosted level for one skill
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillState {
    pub experience: i64,
    pub real_level: i32,
}

/// Skull shown above a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkullIcon {
    Skull,
    SkullFightPit,
    SkullHighRisk,
    DeadmanOne,
    DeadmanTwo,
    DeadmanThree,
    DeadmanFour,
    DeadmanFive,
}

/// Prayer icon shown above a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HeadIcon {
    Melee,
    Ranged,
    Magic,
    Retribution,
    Smite,
    Redemption,
    RangeMage,
    RangeMelee,
    MageMelee,
    RangeMageMelee,
}

impl HeadIcon {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Melee => "MELEE",
            Self::Ranged => "RANGED",
            Self::Magic => "MAGIC",
            Self::Retribution => "RETRIBUTION",
            Self::Smite => "SMITE",
            Self::Redemption => "REDEMPTION",
            Self::RangeMage => "RANGE_MAGE",
            Self::RangeMelee => "RANGE_MELEE",
            Self::MageMelee => "MAGE_MELEE",
            Self::RangeMageMelee => "RANGE_MAGE_MELEE",
        }
    }
}

/// The logged-in player's own avatar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalPlayer {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub skull: Option<SkullIcon>,

    #[serde(default)]
    pub overhead: Option<HeadIcon>,

    pub location: LocalPoint,
}

/// Everything the builders read from the client for one sample
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientSnapshot {
    /// Login name; `None` before the player identity is known
    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub world_types: HashSet<WorldType>,

    #[serde(default)]
    pub skills: HashMap<Skill, SkillState>,

    /// Player variables by slot id, missing slots read as 0
    #[serde(default)]
    pub varps: HashMap<i32, i32>,

    /// Variable bits by id, missing ids read as 0
    #[serde(default)]
    pub varbits: HashMap<i32, i32>,

    #[serde(default)]
    pub local_player: Option<LocalPlayer>,

    #[serde(default)]
    pub scene: Scene,
}

impl ClientSnapshot {
    /// Current username, treating an empty string as unknown
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref().filter(|name| !name.is_empty())
    }

    pub fn skill_experience(&self, skill: Skill) -> i64 {
        self.skills.get(&skill).map_or(0, |s| s.experience)
    }

    /// Unboosted level, 1 for skills missing from the snapshot
    pub fn real_skill_level(&self, skill: Skill) -> i32 {
        self.skills.get(&skill).map_or(1, |s| s.real_level)
    }

    /// Sum of experience over every trainable skill
    pub fn overall_experience(&self) -> i64 {
        Skill::trainable().map(|s| self.skill_experience(s)).sum()
    }

    /// Displayed total level (sum of real levels)
    pub fn total_level(&self) -> i32 {
        Skill::trainable().map(|s| self.real_skill_level(s)).sum()
    }

    pub fn varp(&self, id: i32) -> i32 {
        self.varps.get(&id).copied().unwrap_or(0)
    }

    pub fn varbit(&self, id: i32) -> i32 {
        self.varbits.get(&id).copied().unwrap_or(0)
    }

    pub fn is_world_type(&self, world_type: WorldType) -> bool {
        self.world_types.contains(&world_type)
    }

    pub fn is_in_instanced_region(&self) -> bool {
        self.scene.is_instanced()
    }

    /// Resolve a scene tile against the current scene
    pub fn to_world(&self, local: LocalPoint) -> Option<WorldPoint> {
        self.scene.to_world(local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_username_is_unknown() {
        let snapshot = ClientSnapshot {
            username: Some(String::new()),
            ..ClientSnapshot::default()
        };
        assert_eq!(snapshot.username(), None);
    }

    #[test]
    fn test_missing_skills_default() {
        let snapshot = ClientSnapshot::default();
        assert_eq!(snapshot.skill_experience(Skill::Attack), 0);
        assert_eq!(snapshot.real_skill_level(Skill::Attack), 1);
        assert_eq!(snapshot.total_level(), 23);
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{
            "username": "zezima",
            "world_types": ["MEMBERS"],
            "skills": { "ATTACK": { "experience": 83, "real_level": 2 } },
            "varps": { "101": 12 },
            "scene": { "base_x": 3200, "base_y": 3200, "plane": 0 }
        }"#;

        let snapshot: ClientSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.username(), Some("zezima"));
        assert!(snapshot.is_world_type(WorldType::Members));
        assert_eq!(snapshot.skill_experience(Skill::Attack), 83);
        assert_eq!(snapshot.varp(101), 12);
        assert!(!snapshot.is_in_instanced_region());
    }
}
