use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::player::input::InputState;
use crate::utils::settings::{PhysicsSettings, PlayerSettings};
use crate::world::collision::CollisionSystem;

const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.001;

/// Health and hunger as shown on the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStats {
    pub health: u32,
    pub hunger: u32,
}

/// First-person player. `position` is the eye; kinematics are advanced one
/// fixed tick at a time by [`PlayerController::step`].
#[derive(Debug, Clone)]
pub struct PlayerController {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub velocity_y: f32,
    pub on_ground: bool,
    health: f32,
    hunger: f32,
    max_health: f32,
    max_hunger: f32,
    physics: PhysicsSettings,
}

impl PlayerController {
    pub fn new(player: &PlayerSettings, physics: PhysicsSettings) -> Self {
        PlayerController {
            position: player.spawn,
            yaw: 0.0,
            pitch: 0.0,
            velocity_y: 0.0,
            on_ground: false,
            health: player.max_health,
            hunger: player.max_hunger,
            max_health: player.max_health,
            max_hunger: player.max_hunger,
            physics,
        }
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    pub fn right(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, self.yaw.cos())
    }

    pub fn look_direction(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn eye_position(&self) -> Vec3 {
        self.position
    }

    /// Mouse look; `dx`/`dy` are already scaled to radians.
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.yaw = (self.yaw + dx).rem_euclid(std::f32::consts::TAU);
        self.pitch = (self.pitch - dy).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn hunger(&self) -> f32 {
        self.hunger
    }

    pub fn set_health(&mut self, health: f32) {
        self.health = health.clamp(0.0, self.max_health);
    }

    pub fn set_hunger(&mut self, hunger: f32) {
        self.hunger = hunger.clamp(0.0, self.max_hunger);
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    pub fn stats(&self) -> PlayerStats {
        PlayerStats {
            health: self.health.floor() as u32,
            hunger: self.hunger.floor() as u32,
        }
    }

    /// Advance one tick: horizontal move, gravity and landing, jump, fall
    /// damage, hunger.
    pub fn step(&mut self, input: &InputState, collision: &CollisionSystem) {
        let physics = &self.physics;

        // Fixed distance per tick per key; diagonals are not normalized.
        let mut move_dir = Vec3::ZERO;
        if input.forward {
            move_dir += self.forward();
        }
        if input.backward {
            move_dir -= self.forward();
        }
        if input.left {
            move_dir -= self.right();
        }
        if input.right {
            move_dir += self.right();
        }
        let target = self.position + move_dir * physics.move_speed;
        if !physics.horizontal_collision || !collision.is_obstructed(target) {
            self.position.x = target.x;
            self.position.z = target.z;
        }

        self.velocity_y -= physics.gravity;
        self.position.y += self.velocity_y;

        let feet = self.position - Vec3::Y;
        if self.position.y < physics.eye_height || collision.is_obstructed(feet) {
            self.position.y = physics.eye_height;
            self.velocity_y = 0.0;
            self.on_ground = true;
        } else {
            self.on_ground = false;
        }

        if input.jump && self.on_ground {
            self.velocity_y = physics.jump_impulse;
            self.on_ground = false;
        }

        // Bleeds every tick while falling fast, not once on landing.
        if self.velocity_y < physics.fall_damage_velocity && !self.on_ground {
            self.health = (self.health - physics.fall_damage).max(0.0);
        }

        self.hunger = (self.hunger - physics.hunger_decay).max(0.0);

        tracing::trace!(
            "Player at {:?}, vy {:.3}, grounded {}",
            self.position,
            self.velocity_y,
            self.on_ground
        );
    }
}
