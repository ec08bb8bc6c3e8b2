//! Deterministic chunk generation
//!
//! Every chunk draws from its own `ChaCha8Rng`, seeded from the world seed and
//! the chunk coordinate, so a chunk always comes out the same no matter when or
//! in what order it is generated.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::constants::*;
use crate::core::block::BlockType;
use crate::core::coords::{ChunkPos, VoxelPos};
use crate::utils::settings::TerrainSettings;

/// Output of generating one chunk.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedChunk {
    pub pos: ChunkPos,
    /// Surface height per column, indexed `[lx][lz]`.
    pub heights: [[i32; CHUNK_SIZE as usize]; CHUNK_SIZE as usize],
    /// Voxels in generation order; a later entry for the same position wins.
    pub voxels: Vec<(VoxelPos, BlockType)>,
}

impl GeneratedChunk {
    /// Surface height of local column `(lx, lz)`, or `None` outside the chunk.
    pub fn height_at(&self, lx: i32, lz: i32) -> Option<i32> {
        let row = self.heights.get(usize::try_from(lx).ok()?)?;
        row.get(usize::try_from(lz).ok()?).copied()
    }
}

#[derive(Debug, Clone)]
pub struct TerrainGenerator {
    pub seed: u64,
    terrain: TerrainSettings,
}

impl TerrainGenerator {
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, TerrainSettings::default())
    }

    pub fn with_settings(seed: u64, terrain: TerrainSettings) -> Self {
        TerrainGenerator { seed, terrain }
    }

    /// Generate a complete chunk at the given coordinates
    pub fn generate(&self, pos: ChunkPos) -> GeneratedChunk {
        let mut rng = ChaCha8Rng::seed_from_u64(self.chunk_seed(pos));
        let (base_x, base_z) = pos.origin();
        let mut heights = [[0i32; CHUNK_SIZE as usize]; CHUNK_SIZE as usize];
        let mut voxels = Vec::with_capacity((CHUNK_SIZE * CHUNK_SIZE * 4) as usize);

        for lx in 0..CHUNK_SIZE {
            for lz in 0..CHUNK_SIZE {
                let world_x = base_x + lx;
                let world_z = base_z + lz;
                let height = self.column_height(world_x, rng.r#gen::<f64>());
                heights[lx as usize][lz as usize] = height;

                for y in 0..height {
                    let mut block = surface_block(y, height);
                    if block == BlockType::Stone {
                        block = roll_ore(rng.r#gen::<f64>());
                    }
                    voxels.push((VoxelPos::new(world_x, y, world_z), block));
                }

                if height < WATER_MAX_HEIGHT {
                    voxels.push((VoxelPos::new(world_x, WATER_LEVEL, world_z), BlockType::Water));
                }

                if height >= TREE_MIN_GROUND && rng.r#gen::<f64>() < self.terrain.tree_chance {
                    let trunk = rng.gen_range(TRUNK_MIN..=TRUNK_MAX);
                    place_tree(&mut voxels, world_x, world_z, height, trunk);
                }
            }
        }

        tracing::trace!(
            "Generated chunk ({}, {}) with {} voxels",
            pos.x,
            pos.z,
            voxels.len()
        );

        GeneratedChunk {
            pos,
            heights,
            voxels,
        }
    }

    /// Column surface level for jitter draw `r` in `[0, 1)`.
    pub fn column_height(&self, world_x: i32, r: f64) -> i32 {
        let wave = (world_x as f64 / self.terrain.wave_period).sin() * self.terrain.wave_amplitude;
        (wave + r * self.terrain.jitter).abs().floor() as i32
    }

    fn chunk_seed(&self, pos: ChunkPos) -> u64 {
        let mut hash = self.seed;
        hash = hash.wrapping_add(pos.x as u32 as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        hash ^= hash >> 29;
        hash = hash.wrapping_add(pos.z as u32 as u64).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        hash ^ (hash >> 32)
    }
}

/// Base layer for height `y` of a column `height` voxels tall.
pub fn surface_block(y: i32, height: i32) -> BlockType {
    if y == height - 1 {
        if height > SNOW_LINE {
            BlockType::Snow
        } else {
            BlockType::Grass
        }
    } else if y >= height - 1 - DIRT_DEPTH {
        BlockType::Dirt
    } else {
        BlockType::Stone
    }
}

/// Maps a uniform draw in `[0, 1)` onto the ore bands for a stone voxel.
pub fn roll_ore(r: f64) -> BlockType {
    if r < ORE_IRON_BELOW {
        BlockType::Iron
    } else if r < ORE_COAL_BELOW {
        BlockType::Coal
    } else if r < ORE_GOLD_BELOW {
        BlockType::Gold
    } else {
        BlockType::Stone
    }
}

/// Trunk from `ground`, then a flat 3x3 canopy on top. The canopy may cross
/// into neighbouring chunks.
pub(crate) fn place_tree(
    voxels: &mut Vec<(VoxelPos, BlockType)>,
    world_x: i32,
    world_z: i32,
    ground: i32,
    trunk: i32,
) {
    for ty in 0..trunk {
        voxels.push((VoxelPos::new(world_x, ground + ty, world_z), BlockType::Wood));
    }
    let crown_y = ground + trunk;
    for dx in -1..=1 {
        for dz in -1..=1 {
            voxels.push((
                VoxelPos::new(world_x + dx, crown_y, world_z + dz),
                BlockType::Leaves,
            ));
        }
    }
}
