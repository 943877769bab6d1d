//! Experience curve and combat level formulas.

use crate::utils::config::MAX_VIRTUAL_LEVEL;
use std::sync::OnceLock;

/// Experience required for each level, index 0 = level 1
fn xp_table() -> &'static [i64] {
    static TABLE: OnceLock<Vec<i64>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = Vec::with_capacity(MAX_VIRTUAL_LEVEL as usize);
        let mut points: i64 = 0;
        for level in 1..=MAX_VIRTUAL_LEVEL {
            table.push(points / 4);
            let level = f64::from(level);
            points += (level + 300.0 * 2f64.powf(level / 7.0)).floor() as i64;
        }
        table
    })
}

/// Experience needed to reach `level`
///
/// Levels outside 1..=126 are clamped into range.
pub fn xp_for_level(level: i32) -> i64 {
    let index = level.clamp(1, MAX_VIRTUAL_LEVEL) - 1;
    xp_table()[index as usize]
}

/// Level implied by an experience amount, ignoring the 99 cap
///
/// Negative experience is treated as zero.
pub fn level_for_xp(xp: i64) -> i32 {
    // Number of thresholds at or below xp; level 1 always qualifies
    let reached = xp_table().partition_point(|&needed| needed <= xp.max(0));
    reached as i32
}

/// The seven levels that feed the combat formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatLevels {
    pub attack: i32,
    pub strength: i32,
    pub defence: i32,
    pub hitpoints: i32,
    pub magic: i32,
    pub ranged: i32,
    pub prayer: i32,
}

impl CombatLevels {
    /// Combat level with the fractional part kept
    pub fn precise(&self) -> f64 {
        let base = 0.25 * f64::from(self.defence + self.hitpoints + self.prayer / 2);
        let melee = 0.325 * f64::from(self.attack + self.strength);
        let range = 0.325 * f64::from(self.ranged / 2 + self.ranged);
        let mage = 0.325 * f64::from(self.magic / 2 + self.magic);
        base + melee.max(range).max(mage)
    }

    /// Combat level as displayed in game
    pub fn level(&self) -> i32 {
        self.precise().floor() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_thresholds() {
        assert_eq!(xp_for_level(1), 0);
        assert_eq!(xp_for_level(2), 83);
        assert_eq!(xp_for_level(10), 1_154);
        assert_eq!(xp_for_level(99), 13_034_431);
        assert_eq!(xp_for_level(126), 188_884_740);
    }

    #[test]
    fn test_level_for_xp_boundaries() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(level_for_xp(82), 1);
        assert_eq!(level_for_xp(83), 2);
        assert_eq!(level_for_xp(13_034_430), 98);
        assert_eq!(level_for_xp(13_034_431), 99);
        assert_eq!(level_for_xp(200_000_000), 126);
        assert_eq!(level_for_xp(-5), 1);
    }

    #[test]
    fn test_combat_all_99() {
        let levels = CombatLevels {
            attack: 99,
            strength: 99,
            defence: 99,
            hitpoints: 99,
            magic: 99,
            ranged: 99,
            prayer: 99,
        };
        assert_eq!(levels.level(), 126);
        assert!((levels.precise() - 126.1).abs() < 1e-9);
    }

    #[test]
    fn test_combat_fresh_account() {
        let levels = CombatLevels {
            attack: 1,
            strength: 1,
            defence: 1,
            hitpoints: 10,
            magic: 1,
            ranged: 1,
            prayer: 1,
        };
        assert_eq!(levels.level(), 3);
    }

    #[test]
    fn test_combat_ranged_dominates() {
        let levels = CombatLevels {
            attack: 1,
            strength: 1,
            defence: 1,
            hitpoints: 10,
            magic: 1,
            ranged: 99,
            prayer: 1,
        };
        // base 2.75 + 0.325 * (49 + 99)
        assert!((levels.precise() - 50.85).abs() < 1e-9);
    }
}
