// World constants
pub const CHUNK_SIZE: i32 = 16;
pub const LOAD_RADIUS: i32 = 2;

// Terrain constants
pub const TERRAIN_WAVE_PERIOD: f64 = 5.0;
pub const TERRAIN_WAVE_AMPLITUDE: f64 = 3.0;
pub const TERRAIN_JITTER: f64 = 2.0;
pub const SNOW_LINE: i32 = 4;
pub const DIRT_DEPTH: i32 = 3;
pub const WATER_LEVEL: i32 = 1;
pub const WATER_MAX_HEIGHT: i32 = 2;
pub const TREE_CHANCE: f64 = 0.05;
pub const TREE_MIN_GROUND: i32 = 2;
pub const TRUNK_MIN: i32 = 2;
pub const TRUNK_MAX: i32 = 3;

// Ore bands on a single uniform draw
pub const ORE_IRON_BELOW: f64 = 0.05;
pub const ORE_COAL_BELOW: f64 = 0.08;
pub const ORE_GOLD_BELOW: f64 = 0.09;

// Collision box half extents
pub const COLLISION_HALF_X: f32 = 0.5;
pub const COLLISION_HALF_Y: f32 = 1.0;
pub const COLLISION_HALF_Z: f32 = 0.5;

// Player constants (per tick)
pub const PLAYER_SPAWN: [f32; 3] = [0.0, 5.0, 0.0];
pub const PLAYER_EYE_HEIGHT: f32 = 1.5;
pub const PLAYER_MOVE_SPEED: f32 = 0.15;
pub const GRAVITY: f32 = 0.02;
pub const JUMP_IMPULSE: f32 = 0.3;
pub const FALL_DAMAGE_VELOCITY: f32 = -0.5;
pub const FALL_DAMAGE_PER_TICK: f32 = 0.02;
pub const HUNGER_DECAY_PER_TICK: f32 = 0.001;
pub const MAX_HEALTH: f32 = 20.0;
pub const MAX_HUNGER: f32 = 20.0;

// Interaction
pub const PLAYER_REACH: f32 = 64.0;
pub const MOUSE_SENSITIVITY: f32 = 0.002;

// Simulation
pub const TICK_RATE: u32 = 60;
pub const MAX_TICKS_PER_FRAME: u32 = 5;
