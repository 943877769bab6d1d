//! Scene-local to world coordinate resolution.
//!
//! Instanced areas are built from copies of template chunks that may be
//! rotated. Resolving a tile inside an instance maps it back onto the
//! template's world coordinates so positions in e.g. boss rooms line up
//! with the real map.

use crate::utils::config::{CHUNK_SIZE, MAX_PLANES, SCENE_SIZE};
use serde::{Deserialize, Serialize};

/// Tile position relative to the loaded scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalPoint {
    pub scene_x: i32,
    pub scene_y: i32,
}

impl LocalPoint {
    pub fn new(scene_x: i32, scene_y: i32) -> Self {
        Self { scene_x, scene_y }
    }

    fn in_scene(&self) -> bool {
        (0..SCENE_SIZE).contains(&self.scene_x) && (0..SCENE_SIZE).contains(&self.scene_y)
    }
}

/// Absolute world position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: i32,
    pub y: i32,
    pub plane: i32,
}

impl WorldPoint {
    pub fn new(x: i32, y: i32, plane: i32) -> Self {
        Self { x, y, plane }
    }

    /// Id of the 64x64 map region containing this point
    pub fn region_id(&self) -> i32 {
        ((self.x >> 6) << 8) | (self.y >> 6)
    }

    /// Rotate clockwise inside the enclosing chunk, `rotation` quarter turns
    fn rotate(self, rotation: i32) -> Self {
        let chunk_x = self.x & -CHUNK_SIZE;
        let chunk_y = self.y & -CHUNK_SIZE;
        let x = self.x & (CHUNK_SIZE - 1);
        let y = self.y & (CHUNK_SIZE - 1);
        let last = CHUNK_SIZE - 1;

        match rotation & 3 {
            1 => Self::new(chunk_x + y, chunk_y + (last - x), self.plane),
            2 => Self::new(chunk_x + (last - x), chunk_y + (last - y), self.plane),
            3 => Self::new(chunk_x + (last - y), chunk_y + x, self.plane),
            _ => self,
        }
    }
}

/// A decoded instance template chunk reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TemplateChunk {
    rotation: i32,
    x: i32,
    y: i32,
    plane: i32,
}

impl TemplateChunk {
    fn decode(packed: i32) -> Self {
        Self {
            rotation: packed >> 1 & 0x3,
            y: (packed >> 3 & 0x7FF) * CHUNK_SIZE,
            x: (packed >> 14 & 0x3FF) * CHUNK_SIZE,
            plane: packed >> 24 & 0x3,
        }
    }
}

/// The currently loaded scene
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// World x of scene tile (0, 0)
    pub base_x: i32,

    /// World y of scene tile (0, 0)
    pub base_y: i32,

    /// Plane the player is on
    pub plane: i32,

    /// Packed template chunks indexed `[plane][chunk_x][chunk_y]`,
    /// present only while inside an instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_chunks: Option<Vec<Vec<Vec<i32>>>>,
}

impl Scene {
    pub fn is_instanced(&self) -> bool {
        self.instance_chunks.is_some()
    }

    /// Resolve a scene tile to world coordinates
    ///
    /// Returns `None` for tiles outside the scene, or inside an instance
    /// whose template data does not cover the tile.
    pub fn to_world(&self, local: LocalPoint) -> Option<WorldPoint> {
        if !local.in_scene() {
            return None;
        }

        let Some(chunks) = &self.instance_chunks else {
            return Some(WorldPoint::new(
                self.base_x + local.scene_x,
                self.base_y + local.scene_y,
                self.plane,
            ));
        };

        let plane = usize::try_from(self.plane).ok().filter(|p| *p < MAX_PLANES)?;
        let packed = *chunks
            .get(plane)?
            .get((local.scene_x / CHUNK_SIZE) as usize)?
            .get((local.scene_y / CHUNK_SIZE) as usize)?;
        let template = TemplateChunk::decode(packed);

        let point = WorldPoint::new(
            template.x + (local.scene_x & (CHUNK_SIZE - 1)),
            template.y + (local.scene_y & (CHUNK_SIZE - 1)),
            template.plane,
        );
        Some(point.rotate(4 - template.rotation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack(x_chunk: i32, y_chunk: i32, plane: i32, rotation: i32) -> i32 {
        (plane << 24) | (x_chunk << 14) | (y_chunk << 3) | (rotation << 1)
    }

    fn instance_scene(packed: i32) -> Scene {
        let grid = vec![vec![vec![packed; 13]; 13]; 4];
        Scene {
            base_x: 0,
            base_y: 0,
            plane: 0,
            instance_chunks: Some(grid),
        }
    }

    #[test]
    fn test_region_id() {
        assert_eq!(WorldPoint::new(3222, 3218, 0).region_id(), 12850);
        assert_eq!(WorldPoint::new(3400, 5780, 0).region_id(), 13658);
        assert_eq!(WorldPoint::new(0, 0, 0).region_id(), 0);
    }

    #[test]
    fn test_plain_scene_offsets_by_base() {
        let scene = Scene {
            base_x: 3200,
            base_y: 3200,
            plane: 1,
            instance_chunks: None,
        };
        assert_eq!(
            scene.to_world(LocalPoint::new(22, 18)),
            Some(WorldPoint::new(3222, 3218, 1))
        );
    }

    #[test]
    fn test_out_of_scene_unresolvable() {
        let scene = Scene::default();
        assert_eq!(scene.to_world(LocalPoint::new(-1, 5)), None);
        assert_eq!(scene.to_world(LocalPoint::new(5, 104)), None);
    }

    #[test]
    fn test_unrotated_instance_maps_to_template() {
        // template chunk (400, 450) is world (3200, 3600)
        let scene = instance_scene(pack(400, 450, 2, 0));
        assert_eq!(
            scene.to_world(LocalPoint::new(10, 13)),
            Some(WorldPoint::new(3202, 3605, 2))
        );
    }

    #[test]
    fn test_rotated_instance() {
        // rotation 1 is undone with three quarter turns: (x, y) -> (7 - y, x)
        let scene = instance_scene(pack(400, 450, 0, 1));
        assert_eq!(
            scene.to_world(LocalPoint::new(2, 5)),
            Some(WorldPoint::new(3200 + 2, 3600 + 2, 0))
        );
    }

    #[test]
    fn test_missing_template_unresolvable() {
        let scene = Scene {
            instance_chunks: Some(vec![]),
            ..Scene::default()
        };
        assert_eq!(scene.to_world(LocalPoint::new(3, 3)), None);
    }

    #[test]
    fn test_rotation_round_trip() {
        let point = WorldPoint::new(3203, 3606, 0);
        let back = point.rotate(1).rotate(3);
        assert_eq!(back, point);
    }
}
