//! Skill experience and self (player status) measurements.

use super::creator::{present, MeasurementCreator};
use crate::client::{level_for_xp, CombatLevels, Skill, WorldType};
use crate::model::{Measurement, Series, SeriesName};
use crate::utils::config::{
    DEFAULT_OVERHEAD, DEFAULT_PLAYER_NAME, VARBIT_LEAGUE_TASKS, VARP_LEAGUE_POINTS,
    VARP_QUEST_POINTS,
};
use log::debug;

impl MeasurementCreator<'_> {
    pub fn create_xp_series(&self, skill: Skill) -> Option<Series> {
        present(self.series(SeriesName::Skill).tag("skill", skill.name()).build())
    }

    /// Sum of virtual levels over every trainable skill
    pub fn virtual_total_level(&self) -> i32 {
        Skill::trainable()
            .map(|skill| level_for_xp(self.client.skill_experience(skill)))
            .sum()
    }

    /// Experience sample for one skill
    ///
    /// Returns `None` for a skill with no experience, which is also what an
    /// unloaded skill table looks like.
    pub fn create_xp_measurement(&self, skill: Skill) -> Option<Measurement> {
        let xp = if skill == Skill::Overall {
            self.client.overall_experience()
        } else {
            self.client.skill_experience(skill)
        };
        if xp == 0 {
            debug!("No experience in {}, skipping", skill);
            return None;
        }

        let (virtual_level, real_level) = if skill == Skill::Overall {
            (self.virtual_total_level(), self.client.total_level())
        } else {
            (level_for_xp(xp), self.client.real_skill_level(skill))
        };

        Self::finish(
            Measurement::builder(self.create_xp_series(skill)?)
                .numeric("xp", xp)
                .numeric("realLevel", real_level)
                .numeric("virtualLevel", virtual_level),
        )
    }

    pub fn create_self_series(&self) -> Option<Series> {
        present(self.series(SeriesName::SelfStats).build())
    }

    pub fn combat_levels(&self) -> CombatLevels {
        let level = |skill| self.client.real_skill_level(skill);
        CombatLevels {
            attack: level(Skill::Attack),
            strength: level(Skill::Strength),
            defence: level(Skill::Defence),
            hitpoints: level(Skill::Hitpoints),
            magic: level(Skill::Magic),
            ranged: level(Skill::Ranged),
            prayer: level(Skill::Prayer),
        }
    }

    /// Player status sample: combat, quest points, skull, name, overhead
    ///
    /// League worlds additionally report task and point progress.
    pub fn create_self_measurement(&self) -> Option<Measurement> {
        let Some(local) = self.client.local_player.as_ref() else {
            debug!("No local player, skipping self sample");
            return None;
        };

        let mut builder = Measurement::builder(self.create_self_series()?)
            .numeric("combat", self.combat_levels().precise())
            .numeric("questPoints", self.client.varp(VARP_QUEST_POINTS))
            .numeric("skulled", local.skull.is_some())
            .string(
                "name",
                local.name.as_deref().unwrap_or(DEFAULT_PLAYER_NAME),
            )
            .string(
                "overhead",
                local.overhead.map_or(DEFAULT_OVERHEAD, |icon| icon.name()),
            );

        if self.client.is_world_type(WorldType::League) {
            builder = builder
                .numeric("leagueTasksComplete", self.client.varbit(VARBIT_LEAGUE_TASKS))
                .numeric("leaguePoints", self.client.varp(VARP_LEAGUE_POINTS));
        }

        Self::finish(builder)
    }
}
