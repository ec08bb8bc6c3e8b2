use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::Result;

pub const SETTINGS_FILE: &str = "settings.bin";

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct GameSettings {
    pub world: WorldSettings,
    #[serde(default)]
    pub terrain: TerrainSettings,
    pub physics: PhysicsSettings,
    pub player: PlayerSettings,
    pub controls: ControlsSettings,
    #[serde(default)]
    pub simulation: SimulationSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WorldSettings {
    pub seed: u64,
    /// Chebyshev radius, in chunks, kept generated around the player.
    pub load_radius: i32,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            seed: 2137,
            load_radius: LOAD_RADIUS,
        }
    }
}

/// Shape of the column height field: `floor(|sin(x / period) * amplitude + jitter * r|)`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TerrainSettings {
    pub wave_period: f64,
    pub wave_amplitude: f64,
    pub jitter: f64,
    pub tree_chance: f64,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            wave_period: TERRAIN_WAVE_PERIOD,
            wave_amplitude: TERRAIN_WAVE_AMPLITUDE,
            jitter: TERRAIN_JITTER,
            tree_chance: TREE_CHANCE,
        }
    }
}

/// Per-tick kinematics constants.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PhysicsSettings {
    pub gravity: f32,
    pub jump_impulse: f32,
    pub move_speed: f32,
    pub eye_height: f32,
    pub fall_damage_velocity: f32,
    pub fall_damage: f32,
    pub hunger_decay: f32,
    /// Reject horizontal moves into solid geometry. Off by default, so the
    /// player can walk through blocks and only lands on them.
    #[serde(default)]
    pub horizontal_collision: bool,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            move_speed: PLAYER_MOVE_SPEED,
            eye_height: PLAYER_EYE_HEIGHT,
            fall_damage_velocity: FALL_DAMAGE_VELOCITY,
            fall_damage: FALL_DAMAGE_PER_TICK,
            hunger_decay: HUNGER_DECAY_PER_TICK,
            horizontal_collision: false,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlayerSettings {
    pub spawn: Vec3,
    pub max_health: f32,
    pub max_hunger: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            spawn: Vec3::from_array(PLAYER_SPAWN),
            max_health: MAX_HEALTH,
            max_hunger: MAX_HUNGER,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ControlsSettings {
    pub mouse_sensitivity: f32,
    pub invert_mouse: bool,
    pub reach: f32,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            mouse_sensitivity: MOUSE_SENSITIVITY,
            invert_mouse: false,
            reach: PLAYER_REACH,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SimulationSettings {
    pub tick_rate: u32,
    pub max_ticks_per_frame: u32,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            max_ticks_per_frame: MAX_TICKS_PER_FRAME,
        }
    }
}

impl SimulationSettings {
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }
}

/// Per-user location of the settings file, falling back to the working directory.
pub fn default_settings_path() -> PathBuf {
    ProjectDirs::from("", "", "voxelcraft")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE))
}

pub fn save_settings(path: &Path, settings: &GameSettings) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    bincode::serialize_into(&mut writer, settings)?;
    writer.flush()?;
    Ok(())
}

pub fn load_settings(path: &Path) -> Result<GameSettings> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let settings = bincode::deserialize_from(&mut reader)?;
    Ok(settings)
}

/// Loads `path`, or the defaults when the file does not exist yet.
pub fn load_or_default(path: &Path) -> Result<GameSettings> {
    match load_settings(path) {
        Err(crate::error::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("No settings at {}, using defaults", path.display());
            Ok(GameSettings::default())
        }
        other => other,
    }
}
