//! Voxel traversal for line-of-sight picking.
//!
//! Walks the grid cell by cell along the ray (Amanatides & Woo), so the first
//! occupied cell found is the nearest hit. Voxels are unit cubes centred on
//! integer coordinates, so the walk runs on a grid shifted by half a unit.

use glam::{IVec3, Vec3};

use crate::core::block::BlockType;
use crate::core::coords::VoxelPos;
use crate::core::voxel_map::VoxelMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub voxel: VoxelPos,
    pub block: BlockType,
    /// Outward normal of the face the ray entered through.
    pub normal: IVec3,
    pub point: Vec3,
    pub distance: f32,
}

impl RayHit {
    /// Empty cell adjacent to the hit face.
    pub fn adjacent(&self) -> VoxelPos {
        self.voxel + self.normal
    }
}

/// Nearest voxel (of any type, water included) hit within `max_dist`. The cell
/// holding `origin` is skipped, matching a camera that cannot see the inside
/// faces of the block it stands in.
pub fn raycast(map: &VoxelMap, origin: Vec3, direction: Vec3, max_dist: f32) -> Option<RayHit> {
    if !origin.is_finite() || !direction.is_finite() {
        return None;
    }
    let dir = direction.try_normalize()?;
    let shifted = (origin + Vec3::splat(0.5)).to_array();
    let d = dir.to_array();

    let mut cell = [0i32; 3];
    let mut step = [0i32; 3];
    let mut t_max = [f32::INFINITY; 3];
    let mut t_delta = [f32::INFINITY; 3];

    for axis in 0..3 {
        cell[axis] = shifted[axis].floor() as i32;
        if d[axis] > 0.0 {
            step[axis] = 1;
            t_delta[axis] = 1.0 / d[axis];
            t_max[axis] = (cell[axis] as f32 + 1.0 - shifted[axis]) * t_delta[axis];
        } else if d[axis] < 0.0 {
            step[axis] = -1;
            t_delta[axis] = -1.0 / d[axis];
            t_max[axis] = (shifted[axis] - cell[axis] as f32) * t_delta[axis];
        }
    }

    loop {
        let axis = if t_max[0] < t_max[1] {
            if t_max[0] < t_max[2] { 0 } else { 2 }
        } else if t_max[1] < t_max[2] {
            1
        } else {
            2
        };

        let t = t_max[axis];
        if t > max_dist {
            return None;
        }
        cell[axis] += step[axis];
        t_max[axis] += t_delta[axis];

        let voxel = IVec3::from_array(cell);
        if let Some(block) = map.get(voxel) {
            let mut normal = [0i32; 3];
            normal[axis] = -step[axis];
            return Some(RayHit {
                voxel,
                block,
                normal: IVec3::from_array(normal),
                point: origin + dir * t,
                distance: t,
            });
        }
    }
}
