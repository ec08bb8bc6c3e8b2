//! Sparse voxel storage, grouped by chunk.
//!
//! A position is present iff a block occupies it; absence is air. Voxels are
//! bucketed by the chunk that owns their column so a whole chunk's blocks can
//! be walked (or, later, dropped) without touching the rest of the world.

use rustc_hash::FxHashMap;

use crate::core::block::BlockType;
use crate::core::coords::{ChunkPos, VoxelPos};

#[derive(Default, Debug, Clone, PartialEq)]
pub struct VoxelMap {
    chunks: FxHashMap<ChunkPos, FxHashMap<VoxelPos, BlockType>>,
    len: usize,
}

impl VoxelMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: VoxelPos) -> Option<BlockType> {
        self.chunks
            .get(&ChunkPos::of_voxel(pos))
            .and_then(|voxels| voxels.get(&pos))
            .copied()
    }

    pub fn contains(&self, pos: VoxelPos) -> bool {
        self.get(pos).is_some()
    }

    /// Whether a solid (non-liquid) block occupies `pos`.
    pub fn is_solid(&self, pos: VoxelPos) -> bool {
        self.get(pos).is_some_and(|block| block.is_solid())
    }

    /// Stores `block` at `pos`, returning whatever was there before.
    pub fn insert(&mut self, pos: VoxelPos, block: BlockType) -> Option<BlockType> {
        let previous = self
            .chunks
            .entry(ChunkPos::of_voxel(pos))
            .or_default()
            .insert(pos, block);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    pub fn remove(&mut self, pos: VoxelPos) -> Option<BlockType> {
        let chunk = ChunkPos::of_voxel(pos);
        let voxels = self.chunks.get_mut(&chunk)?;
        let removed = voxels.remove(&pos)?;
        if voxels.is_empty() {
            self.chunks.remove(&chunk);
        }
        self.len -= 1;
        Some(removed)
    }

    pub fn extend<I>(&mut self, voxels: I)
    where
        I: IntoIterator<Item = (VoxelPos, BlockType)>,
    {
        for (pos, block) in voxels {
            self.insert(pos, block);
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (VoxelPos, BlockType)> + '_ {
        self.chunks
            .values()
            .flat_map(|voxels| voxels.iter().map(|(pos, block)| (*pos, *block)))
    }

    /// Voxels whose column belongs to `chunk`.
    pub fn iter_chunk(&self, chunk: ChunkPos) -> impl Iterator<Item = (VoxelPos, BlockType)> + '_ {
        self.chunks
            .get(&chunk)
            .into_iter()
            .flat_map(|voxels| voxels.iter().map(|(pos, block)| (*pos, *block)))
    }

    /// Voxels in every chunk within `radius` chunks of `center`.
    pub fn iter_near(
        &self,
        center: ChunkPos,
        radius: i32,
    ) -> impl Iterator<Item = (VoxelPos, BlockType)> + '_ {
        center
            .neighborhood(radius)
            .flat_map(move |chunk| self.iter_chunk(chunk))
    }

    pub fn chunk_len(&self, chunk: ChunkPos) -> usize {
        self.chunks.get(&chunk).map_or(0, |voxels| voxels.len())
    }

    /// Voxels stacked in the column `(x, z)`, sorted bottom-up.
    pub fn column(&self, x: i32, z: i32) -> Vec<(i32, BlockType)> {
        let mut column: Vec<_> = self
            .iter_chunk(ChunkPos::from_block(x, z))
            .filter(|(pos, _)| pos.x == x && pos.z == z)
            .map(|(pos, block)| (pos.y, block))
            .collect();
        column.sort_by_key(|(y, _)| *y);
        column
    }
}
