//! Core data structures for the simulation
//! Contains block types, coordinates and the voxel store.

pub mod block;
pub mod coords;
pub mod voxel_map;

// Re-export commonly used types
pub use block::BlockType;
pub use coords::{ChunkPos, VoxelPos};
pub use voxel_map::VoxelMap;
