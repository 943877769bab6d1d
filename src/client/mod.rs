//! Snapshot providers: client state, world flags, coordinates and the
//! persisted config store.
//!
//! Everything here is read-only from the builders' point of view.

pub mod config_store;
pub mod coords;
pub mod experience;
pub mod skill;
pub mod snapshot;
pub mod world;

// Re-export main types
pub use config_store::{ConfigStore, MemoryConfigStore};
pub use coords::{LocalPoint, Scene, WorldPoint};
pub use experience::{level_for_xp, xp_for_level, CombatLevels};
pub use skill::Skill;
pub use snapshot::{ClientSnapshot, HeadIcon, LocalPlayer, SkillState, SkullIcon};
pub use world::{RegionSet, WorldTagEntry, WorldTagTable, WorldType};
