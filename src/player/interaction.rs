//! Block removal and placement along the view ray.

use crate::core::block::BlockType;
use crate::core::coords::VoxelPos;
use crate::core::voxel_map::VoxelMap;
use crate::player::input::{ClickEvent, MouseButton};
use crate::world::raycast::raycast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// The ray hit nothing within reach.
    Missed,
    /// Clicks are ignored while an overlay such as the start screen is up.
    Inactive,
    Removed {
        pos: VoxelPos,
        block: BlockType,
    },
    /// `replaced` is whatever occupied `pos` before; placement overwrites.
    Placed {
        pos: VoxelPos,
        block: BlockType,
        replaced: Option<BlockType>,
    },
    /// The ray hit water with the remove button, or water was selected for placing.
    Refused {
        hit: VoxelPos,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct InteractionSystem {
    reach: f32,
}

impl InteractionSystem {
    pub fn new(reach: f32) -> Self {
        Self { reach }
    }

    pub fn on_click(
        &self,
        map: &mut VoxelMap,
        click: &ClickEvent,
        selected: BlockType,
    ) -> InteractionOutcome {
        let Some(hit) = raycast(map, click.origin, click.direction, self.reach) else {
            return InteractionOutcome::Missed;
        };

        match click.button {
            MouseButton::Primary => {
                if hit.block.is_liquid() {
                    return InteractionOutcome::Refused { hit: hit.voxel };
                }
                map.remove(hit.voxel);
                tracing::debug!("Removed {} at {:?}", hit.block, hit.voxel);
                InteractionOutcome::Removed {
                    pos: hit.voxel,
                    block: hit.block,
                }
            }
            MouseButton::Secondary => {
                if selected.is_liquid() {
                    return InteractionOutcome::Refused { hit: hit.voxel };
                }
                let pos = hit.adjacent();
                let replaced = map.insert(pos, selected);
                tracing::debug!("Placed {} at {:?} (replaced {:?})", selected, pos, replaced);
                InteractionOutcome::Placed {
                    pos,
                    block: selected,
                    replaced,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn ground() -> VoxelMap {
        let mut map = VoxelMap::new();
        for x in -2..=2 {
            for z in -2..=2 {
                map.insert(VoxelPos::new(x, 0, z), BlockType::Stone);
            }
        }
        map
    }

    fn looking_down(button: MouseButton) -> ClickEvent {
        ClickEvent::new(button, Vec3::new(0.0, 1.5, 0.0), Vec3::NEG_Y).unwrap()
    }

    #[test]
    fn test_remove_exactly_the_hit_voxel() {
        let mut map = ground();
        let before = map.clone();
        let system = InteractionSystem::new(64.0);

        let click = looking_down(MouseButton::Primary);
        let outcome = system.on_click(&mut map, &click, BlockType::Grass);
        assert_eq!(
            outcome,
            InteractionOutcome::Removed {
                pos: VoxelPos::new(0, 0, 0),
                block: BlockType::Stone
            }
        );
        assert_eq!(map.len(), before.len() - 1);
        for (pos, block) in before.iter() {
            if pos != VoxelPos::new(0, 0, 0) {
                assert_eq!(map.get(pos), Some(block));
            }
        }
    }

    #[test]
    fn test_place_on_top_face() {
        let mut map = ground();
        let system = InteractionSystem::new(64.0);
        let click = looking_down(MouseButton::Secondary);
        let outcome = system.on_click(&mut map, &click, BlockType::Wood);
        assert_eq!(
            outcome,
            InteractionOutcome::Placed {
                pos: VoxelPos::new(0, 1, 0),
                block: BlockType::Wood,
                replaced: None
            }
        );
        assert_eq!(map.get(VoxelPos::new(0, 1, 0)), Some(BlockType::Wood));
        assert_eq!(map.len(), 26);
    }

    #[test]
    fn test_place_against_side_face() {
        let mut map = VoxelMap::new();
        map.insert(VoxelPos::new(4, 2, 0), BlockType::Dirt);
        let system = InteractionSystem::new(64.0);
        let origin = Vec3::new(0.0, 2.0, 0.0);
        let click = ClickEvent::new(MouseButton::Secondary, origin, Vec3::X).unwrap();
        system.on_click(&mut map, &click, BlockType::Sand);
        assert_eq!(map.get(VoxelPos::new(3, 2, 0)), Some(BlockType::Sand));
    }

    #[test]
    fn test_place_then_remove_round_trip() {
        let mut map = ground();
        let before = map.clone();
        let system = InteractionSystem::new(64.0);

        system.on_click(&mut map, &looking_down(MouseButton::Secondary), BlockType::Snow);
        assert_ne!(map, before);
        let remove = looking_down(MouseButton::Primary);
        let outcome = system.on_click(&mut map, &remove, BlockType::Snow);
        assert_eq!(
            outcome,
            InteractionOutcome::Removed {
                pos: VoxelPos::new(0, 1, 0),
                block: BlockType::Snow
            }
        );
        assert_eq!(map, before);
    }

    #[test]
    fn test_water_cannot_be_removed_or_placed() {
        let mut map = VoxelMap::new();
        map.insert(VoxelPos::new(0, 0, 0), BlockType::Water);
        let before = map.clone();
        let system = InteractionSystem::new(64.0);

        let remove = looking_down(MouseButton::Primary);
        let outcome = system.on_click(&mut map, &remove, BlockType::Grass);
        assert_eq!(outcome, InteractionOutcome::Refused { hit: VoxelPos::new(0, 0, 0) });

        let mut floor = ground();
        let floor_before = floor.clone();
        let place = looking_down(MouseButton::Secondary);
        let outcome = system.on_click(&mut floor, &place, BlockType::Water);
        assert!(matches!(outcome, InteractionOutcome::Refused { .. }));
        assert_eq!(floor, floor_before);
        assert_eq!(map, before);
    }

    #[test]
    fn test_blocks_can_be_placed_on_water() {
        let mut map = VoxelMap::new();
        map.insert(VoxelPos::new(0, 0, 0), BlockType::Water);
        let system = InteractionSystem::new(64.0);
        system.on_click(&mut map, &looking_down(MouseButton::Secondary), BlockType::Dirt);
        assert_eq!(map.get(VoxelPos::new(0, 1, 0)), Some(BlockType::Dirt));
    }

    #[test]
    fn test_miss_is_a_no_op() {
        let mut map = ground();
        let before = map.clone();
        let system = InteractionSystem::new(64.0);
        let up = ClickEvent::new(MouseButton::Primary, Vec3::new(0.0, 1.5, 0.0), Vec3::Y).unwrap();
        assert_eq!(system.on_click(&mut map, &up, BlockType::Grass), InteractionOutcome::Missed);
        assert_eq!(map, before);

        let short = InteractionSystem::new(0.5);
        assert_eq!(
            short.on_click(&mut map, &looking_down(MouseButton::Primary), BlockType::Grass),
            InteractionOutcome::Missed
        );
    }
}
