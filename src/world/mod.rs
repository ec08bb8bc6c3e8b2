//! World generation and queries
//! Contains chunk generation, streaming, collision and ray casting.

pub mod collision;
pub mod generator;
pub mod loader;
pub mod raycast;

// Re-export commonly used types
pub use collision::CollisionSystem;
pub use generator::{GeneratedChunk, TerrainGenerator};
pub use loader::ChunkManager;
pub use raycast::{RayHit, raycast};
