//! Synchronous chunk streaming around the player
//!
//! Keeps every chunk within `load_radius` of the player generated. A chunk is
//! generated at most once; nothing is ever unloaded, so player edits are never
//! overwritten by regeneration.

use glam::Vec3;
use rustc_hash::FxHashSet;

use crate::core::coords::ChunkPos;
use crate::core::voxel_map::VoxelMap;
use crate::world::generator::TerrainGenerator;

pub struct ChunkManager {
    generator: TerrainGenerator,
    generated: FxHashSet<ChunkPos>,
    load_radius: i32,
}

impl ChunkManager {
    pub fn new(generator: TerrainGenerator, load_radius: i32) -> Self {
        ChunkManager {
            generator,
            generated: FxHashSet::default(),
            load_radius: load_radius.max(0),
        }
    }

    pub fn is_generated(&self, pos: ChunkPos) -> bool {
        self.generated.contains(&pos)
    }

    pub fn generated_count(&self) -> usize {
        self.generated.len()
    }

    /// Generate and commit a single chunk unless it already exists.
    /// Returns whether generation ran.
    pub fn ensure_chunk_generated(&mut self, map: &mut VoxelMap, pos: ChunkPos) -> bool {
        if !self.generated.insert(pos) {
            return false;
        }
        let chunk = self.generator.generate(pos);
        tracing::debug!(
            "Committing chunk ({}, {}): {} voxels",
            pos.x,
            pos.z,
            chunk.voxels.len()
        );
        map.extend(chunk.voxels);
        true
    }

    /// Make sure every chunk around `player` is generated, nearest first.
    /// Returns the number of chunks generated by this call.
    pub fn ensure_loaded(&mut self, map: &mut VoxelMap, player: Vec3) -> usize {
        let center = ChunkPos::from_world(player);

        let mut missing: Vec<ChunkPos> = center
            .neighborhood(self.load_radius)
            .filter(|pos| !self.generated.contains(pos))
            .collect();
        if missing.is_empty() {
            return 0;
        }

        // Nearest first, ties broken by coordinate so canopy overlap between
        // chunks resolves the same way every run.
        missing.sort_by_key(|pos| (pos.distance_squared(center), *pos));

        let mut count = 0;
        for pos in missing {
            if self.ensure_chunk_generated(map, pos) {
                count += 1;
            }
        }
        tracing::debug!(
            "Loaded {} chunks around ({}, {}), {} total",
            count,
            center.x,
            center.z,
            self.generated.len()
        );
        count
    }
}
