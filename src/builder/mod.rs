//! Measurement builders.
//!
//! This module transforms a client snapshot into:
//! - Skill experience and player status records
//! - Threshold-bucketed inventory valuations
//! - Position and loot records
//! - Activity and kill-count records
//!
//! Every builder returns `Option` (or a possibly empty `Vec`) where data can
//! legitimately be missing; nothing here fails with an error.

pub mod activity;
pub mod creator;
pub mod inventory;
pub mod location;
pub mod player;
pub mod sampler;

// Re-export main types
pub use activity::ActivityState;
pub use creator::MeasurementCreator;
pub use inventory::{InvValueType, InventoryId};
pub use location::{LootEvent, LootRecordType, LootStack};
pub use sampler::{ContainerContents, SampleRequest};
