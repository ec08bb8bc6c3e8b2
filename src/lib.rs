// Core module with fundamental types
pub mod core;

// Player module with input, kinematics and block interaction
pub mod player;

// World module with generation, streaming and spatial queries
pub mod world;

// Play session
pub mod app;

// Settings persistence
pub mod utils;

// Other modules
pub mod constants;
pub mod error;

// Re-exports
pub use app::{Game, GameState, HudStats};
pub use constants::*;
pub use crate::core::{BlockType, ChunkPos, VoxelMap, VoxelPos};
pub use error::{Error, Result};
pub use player::{
    ClickEvent, Hotbar, InputState, InteractionOutcome, InteractionSystem, MouseButton,
    PlayerController, PlayerStats,
};
pub use utils::GameSettings;
pub use world::{ChunkManager, CollisionSystem, RayHit, TerrainGenerator, raycast};
