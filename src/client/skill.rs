//! Trackable skills.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A player skill, plus the synthetic `Overall` aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Skill {
    Attack,
    Defence,
    Strength,
    Hitpoints,
    Ranged,
    Prayer,
    Magic,
    Cooking,
    Woodcutting,
    Fletching,
    Fishing,
    Firemaking,
    Crafting,
    Smithing,
    Mining,
    Herblore,
    Agility,
    Thieving,
    Slayer,
    Farming,
    Runecraft,
    Hunter,
    Construction,
    Overall,
}

impl Skill {
    /// Every skill including `Overall`
    pub const ALL: [Skill; 24] = [
        Skill::Attack,
        Skill::Defence,
        Skill::Strength,
        Skill::Hitpoints,
        Skill::Ranged,
        Skill::Prayer,
        Skill::Magic,
        Skill::Cooking,
        Skill::Woodcutting,
        Skill::Fletching,
        Skill::Fishing,
        Skill::Firemaking,
        Skill::Crafting,
        Skill::Smithing,
        Skill::Mining,
        Skill::Herblore,
        Skill::Agility,
        Skill::Thieving,
        Skill::Slayer,
        Skill::Farming,
        Skill::Runecraft,
        Skill::Hunter,
        Skill::Construction,
        Skill::Overall,
    ];

    /// Real skills only, without the `Overall` pseudo-skill
    pub fn trainable() -> impl Iterator<Item = Skill> {
        Self::ALL.into_iter().filter(|s| *s != Skill::Overall)
    }

    /// Upper-case name used as the `skill` tag value
    pub fn name(&self) -> &'static str {
        match self {
            Self::Attack => "ATTACK",
            Self::Defence => "DEFENCE",
            Self::Strength => "STRENGTH",
            Self::Hitpoints => "HITPOINTS",
            Self::Ranged => "RANGED",
            Self::Prayer => "PRAYER",
            Self::Magic => "MAGIC",
            Self::Cooking => "COOKING",
            Self::Woodcutting => "WOODCUTTING",
            Self::Fletching => "FLETCHING",
            Self::Fishing => "FISHING",
            Self::Firemaking => "FIREMAKING",
            Self::Crafting => "CRAFTING",
            Self::Smithing => "SMITHING",
            Self::Mining => "MINING",
            Self::Herblore => "HERBLORE",
            Self::Agility => "AGILITY",
            Self::Thieving => "THIEVING",
            Self::Slayer => "SLAYER",
            Self::Farming => "FARMING",
            Self::Runecraft => "RUNECRAFT",
            Self::Hunter => "HUNTER",
            Self::Construction => "CONSTRUCTION",
            Self::Overall => "OVERALL",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
