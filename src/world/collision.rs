use glam::Vec3;

use crate::constants::{COLLISION_HALF_X, COLLISION_HALF_Y, COLLISION_HALF_Z};
use crate::core::coords::VoxelPos;
use crate::core::voxel_map::VoxelMap;

/// Point-vs-voxel obstruction queries.
///
/// A point is obstructed when a non-water voxel centre lies strictly within
/// `(0.5, 1.0, 0.5)` of it on each axis. Only the integer positions inside that
/// box are probed, so a query costs a handful of hash lookups regardless of
/// world size.
pub struct CollisionSystem<'a> {
    map: &'a VoxelMap,
    half_extents: Vec3,
}

impl<'a> CollisionSystem<'a> {
    pub fn new(map: &'a VoxelMap) -> Self {
        Self {
            map,
            half_extents: Vec3::new(COLLISION_HALF_X, COLLISION_HALF_Y, COLLISION_HALF_Z),
        }
    }

    pub fn is_obstructed(&self, point: Vec3) -> bool {
        if !point.is_finite() {
            return false;
        }
        let min = (point - self.half_extents).floor().as_ivec3();
        let max = (point + self.half_extents).ceil().as_ivec3();

        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    let pos = VoxelPos::new(x, y, z);
                    if self.within_box(point, pos) && self.map.is_solid(pos) {
                        return true;
                    }
                }
            }
        }
        false
    }

    fn within_box(&self, point: Vec3, pos: VoxelPos) -> bool {
        let d = (point - pos.as_vec3()).abs();
        d.x < self.half_extents.x && d.y < self.half_extents.y && d.z < self.half_extents.z
    }
}
