//! World and chunk coordinate types.

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::CHUNK_SIZE;

/// Integer position of a unit cube. A voxel at `p` spans `p - 0.5 ..= p + 0.5`.
pub type VoxelPos = IVec3;

/// Column region of `CHUNK_SIZE` x `CHUNK_SIZE` voxels.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Chunk owning the integer column `(x, z)`.
    pub fn from_block(x: i32, z: i32) -> Self {
        Self {
            x: x.div_euclid(CHUNK_SIZE),
            z: z.div_euclid(CHUNK_SIZE),
        }
    }

    pub fn of_voxel(pos: VoxelPos) -> Self {
        Self::from_block(pos.x, pos.z)
    }

    /// Chunk under a continuous world position.
    pub fn from_world(pos: Vec3) -> Self {
        Self {
            x: (pos.x / CHUNK_SIZE as f32).floor() as i32,
            z: (pos.z / CHUNK_SIZE as f32).floor() as i32,
        }
    }

    /// World x/z of the chunk's first column.
    pub fn origin(&self) -> (i32, i32) {
        (self.x * CHUNK_SIZE, self.z * CHUNK_SIZE)
    }

    /// Chebyshev distance in chunks.
    pub fn distance(&self, other: ChunkPos) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }

    pub fn distance_squared(&self, other: ChunkPos) -> i32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        dx * dx + dz * dz
    }

    /// All chunks within `radius` (Chebyshev) of this one.
    pub fn neighborhood(self, radius: i32) -> impl Iterator<Item = ChunkPos> {
        (-radius..=radius).flat_map(move |dx| {
            (-radius..=radius).map(move |dz| ChunkPos::new(self.x + dx, self.z + dz))
        })
    }
}
