#![allow(dead_code)]

use rs_metrics::client::{
    ClientSnapshot, LocalPlayer, LocalPoint, MemoryConfigStore, Scene, Skill, SkillState,
    WorldType,
};
use rs_metrics::items::StaticCatalog;

pub const WHIP: i32 = 4151;
pub const WHIP_NOTED: i32 = 4152;
pub const LOGS: i32 = 1511;
pub const BONES: i32 = 526;
pub const COINS: i32 = 995;
pub const PLATINUM: i32 = 13_204;
pub const FILLER: i32 = 20_594;

pub fn catalog() -> StaticCatalog {
    StaticCatalog::new()
        .with_item(COINS, "Coins", 1, 1)
        .with_item(PLATINUM, "Platinum token", 1, 1_000)
        .with_item(WHIP, "Abyssal whip", 120_001, 1_500_000)
        .with_item(LOGS, "Logs", 4, 30)
        .with_item(BONES, "Bones", 1, 100)
        .with_item(FILLER, "Bank filler", 0, 0)
        .with_variant(WHIP_NOTED, WHIP)
}

pub fn client() -> ClientSnapshot {
    let mut client = ClientSnapshot {
        username: Some("Zezima".to_string()),
        world_types: [WorldType::Members].into_iter().collect(),
        local_player: Some(LocalPlayer {
            name: Some("Zezima".to_string()),
            skull: None,
            overhead: None,
            location: LocalPoint::new(50, 60),
        }),
        scene: Scene {
            base_x: 3200,
            base_y: 3150,
            plane: 0,
            instance_chunks: None,
        },
        ..ClientSnapshot::default()
    };
    for skill in Skill::trainable() {
        client.skills.insert(
            skill,
            SkillState {
                experience: 13_034_431,
                real_level: 99,
            },
        );
    }
    client
}

pub fn anonymous_client() -> ClientSnapshot {
    ClientSnapshot {
        username: None,
        ..client()
    }
}

pub fn store() -> MemoryConfigStore {
    MemoryConfigStore::new()
}
