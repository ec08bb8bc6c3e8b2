use glam::Vec3;

use crate::core::block::BlockType;
use crate::core::coords::{ChunkPos, VoxelPos};
use crate::core::voxel_map::VoxelMap;
use crate::error::{Error, Result};
use crate::player::{
    ClickEvent, Hotbar, InputState, InteractionOutcome, InteractionSystem, MouseButton,
    PlayerController,
};
use crate::utils::settings::GameSettings;
use crate::world::{ChunkManager, CollisionSystem, TerrainGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Start screen is up - simulation paused, clicks ignored
    Menu,
    /// Playing - simulation running while the pointer is locked
    Playing,
}

/// Values the HUD collaborator displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudStats {
    pub health: u32,
    pub hunger: u32,
    pub selected: BlockType,
}

/// One play session: the world, the player and the fixed-timestep clock.
pub struct Game {
    settings: GameSettings,
    map: VoxelMap,
    chunks: ChunkManager,
    player: PlayerController,
    hotbar: Hotbar,
    interaction: InteractionSystem,
    state: GameState,
    pointer_locked: bool,
    accumulator: f32,
    ticks: u64,
}

impl Game {
    pub fn new(settings: GameSettings) -> Self {
        tracing::info!("Generating world with seed {}...", settings.world.seed);
        let generator =
            TerrainGenerator::with_settings(settings.world.seed, settings.terrain.clone());
        let mut chunks = ChunkManager::new(generator, settings.world.load_radius);
        let mut map = VoxelMap::new();
        let player = PlayerController::new(&settings.player, settings.physics.clone());

        let loaded = chunks.ensure_loaded(&mut map, player.position);
        tracing::info!(
            "World generated! {} chunks, {} voxels, spawn {:?}",
            loaded,
            map.len(),
            player.position
        );

        let interaction = InteractionSystem::new(settings.controls.reach);
        Game {
            settings,
            map,
            chunks,
            player,
            hotbar: Hotbar::default(),
            interaction,
            state: GameState::Menu,
            pointer_locked: false,
            accumulator: 0.0,
            ticks: 0,
        }
    }

    /// Dismiss the start screen and capture the pointer.
    pub fn play(&mut self) {
        if self.state == GameState::Menu {
            tracing::info!("Starting session");
        }
        self.state = GameState::Playing;
        self.pointer_locked = true;
    }

    pub fn lock_pointer(&mut self) {
        self.pointer_locked = true;
    }

    pub fn release_pointer(&mut self) {
        self.pointer_locked = false;
        // Time spent unlocked must not be replayed on relock.
        self.accumulator = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.state == GameState::Playing && self.pointer_locked
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Feed one frame of wall-clock time. Runs as many fixed ticks as fit,
    /// capped per frame; leftover time beyond the cap is dropped.
    /// Returns the number of ticks run.
    pub fn update(&mut self, input: &InputState, frame_dt: f32) -> u32 {
        if !frame_dt.is_finite() || frame_dt < 0.0 {
            tracing::warn!("Ignoring invalid frame time {}", frame_dt);
            return 0;
        }
        if !self.is_active() {
            return 0;
        }

        let step = self.settings.simulation.tick_seconds();
        let max_ticks = self.settings.simulation.max_ticks_per_frame;
        self.accumulator += frame_dt;

        let mut ran = 0;
        while self.accumulator >= step && ran < max_ticks {
            self.advance(input);
            self.accumulator -= step;
            ran += 1;
        }

        if self.accumulator >= step {
            tracing::warn!(
                "Frame too long, dropping {:.3}s of simulation",
                self.accumulator - self.accumulator % step
            );
            self.accumulator %= step;
        }
        ran
    }

    /// Run exactly one tick if the session is active.
    pub fn tick(&mut self, input: &InputState) -> bool {
        if !self.is_active() {
            return false;
        }
        self.advance(input);
        true
    }

    fn advance(&mut self, input: &InputState) {
        let was_alive = !self.player.is_dead();
        {
            let collision = CollisionSystem::new(&self.map);
            self.player.step(input, &collision);
        }
        self.chunks.ensure_loaded(&mut self.map, self.player.position);
        self.ticks += 1;

        if was_alive && self.player.is_dead() {
            tracing::info!(
                "Player died at {:?} after {} ticks",
                self.player.position,
                self.ticks
            );
        }
    }

    /// Mouse motion in raw device units.
    pub fn look(&mut self, dx: f32, dy: f32) -> Result<()> {
        if !dx.is_finite() || !dy.is_finite() {
            return Err(Error::NonFiniteInput("look delta"));
        }
        if !self.is_active() {
            return Ok(());
        }
        let controls = &self.settings.controls;
        let dy = if controls.invert_mouse { -dy } else { dy };
        self.player.look(
            dx * controls.mouse_sensitivity,
            dy * controls.mouse_sensitivity,
        );
        Ok(())
    }

    /// Click along the player's current view ray.
    pub fn click_button(&mut self, button: MouseButton) -> Result<InteractionOutcome> {
        let click = ClickEvent::new(
            button,
            self.player.eye_position(),
            self.player.look_direction(),
        )?;
        Ok(self.click(&click))
    }

    /// Only the start screen blocks clicks; a released pointer does not.
    pub fn click(&mut self, click: &ClickEvent) -> InteractionOutcome {
        if self.state == GameState::Menu {
            return InteractionOutcome::Inactive;
        }
        let selected = self.hotbar.selected();
        self.interaction.on_click(&mut self.map, click, selected)
    }

    pub fn handle_key_digit(&mut self, digit: u8) -> Option<BlockType> {
        let selected = self.hotbar.select_slot(digit);
        if let Some(block) = selected {
            tracing::debug!("Selected {}", block);
        }
        selected
    }

    pub fn hud(&self) -> HudStats {
        let stats = self.player.stats();
        HudStats {
            health: stats.health,
            hunger: stats.hunger,
            selected: self.hotbar.selected(),
        }
    }

    /// Voxels in chunks within `radius` of the player, for the renderer.
    pub fn visible_voxels(
        &self,
        radius: i32,
    ) -> impl Iterator<Item = (VoxelPos, BlockType)> + '_ {
        self.map
            .iter_near(ChunkPos::from_world(self.player.position), radius)
    }

    pub fn map(&self) -> &VoxelMap {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut VoxelMap {
        &mut self.map
    }

    pub fn chunks(&self) -> &ChunkManager {
        &self.chunks
    }

    pub fn player(&self) -> &PlayerController {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerController {
        &mut self.player
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn position(&self) -> Vec3 {
        self.player.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::settings::TerrainSettings;

    fn treeless() -> GameSettings {
        GameSettings {
            terrain: TerrainSettings {
                tree_chance: 0.0,
                ..TerrainSettings::default()
            },
            ..GameSettings::default()
        }
    }

    #[test]
    fn test_new_session_preloads_spawn() {
        let game = Game::new(GameSettings::default());
        assert_eq!(game.state(), GameState::Menu);
        assert!(!game.is_active());
        assert_eq!(game.chunks().generated_count(), 25);
        assert_eq!(game.position(), Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(
            game.hud(),
            HudStats {
                health: 20,
                hunger: 20,
                selected: BlockType::Grass
            }
        );
    }

    #[test]
    fn test_start_screen_pauses_simulation() {
        let mut game = Game::new(treeless());
        let input = InputState::default();
        assert_eq!(game.update(&input, 0.5), 0);
        assert!(!game.tick(&input));
        assert_eq!(game.position(), Vec3::new(0.0, 5.0, 0.0));

        game.play();
        assert_eq!(game.update(&input, 1.0 / 60.0), 1);
        assert!(game.position().y < 5.0);

        game.release_pointer();
        let paused_at = game.position();
        assert_eq!(game.update(&input, 0.5), 0);
        assert_eq!(game.position(), paused_at);

        game.lock_pointer();
        assert!(game.tick(&input));
        assert_eq!(game.ticks(), 2);
    }

    #[test]
    fn test_long_frames_are_clamped() {
        let mut game = Game::new(treeless());
        game.play();
        let input = InputState::default();
        assert_eq!(game.update(&input, 1.0), 5);
        // The dropped remainder does not carry into the next frame.
        assert_eq!(game.update(&input, 0.0), 0);
        assert_eq!(game.update(&input, f32::NAN), 0);
        assert_eq!(game.update(&input, -1.0), 0);
        assert_eq!(game.ticks(), 5);
    }

    #[test]
    fn test_session_settles_on_the_ground() {
        let mut game = Game::new(treeless());
        game.play();
        for _ in 0..120 {
            game.update(&InputState::default(), 1.0 / 60.0);
        }
        assert!(game.player().on_ground);
        assert_eq!(game.hud().health, 20);
    }

    #[test]
    fn test_walking_streams_new_chunks() {
        let mut game = Game::new(treeless());
        game.play();
        let forward = InputState {
            forward: true,
            ..InputState::default()
        };
        // 0.15 per tick along +x; 120 ticks crosses into chunk x = 1.
        for _ in 0..120 {
            game.tick(&forward);
        }
        assert!(game.position().x > 16.0);
        assert!(game.chunks().is_generated(ChunkPos::new(3, 0)));
        assert_eq!(game.chunks().generated_count(), 30);
    }

    #[test]
    fn test_clicks_need_an_active_session() {
        let mut game = Game::new(treeless());
        game.map_mut().insert(VoxelPos::new(3, 5, 0), BlockType::Stone);
        assert_eq!(
            game.click_button(MouseButton::Primary).unwrap(),
            InteractionOutcome::Inactive
        );
        assert_eq!(game.map().get(VoxelPos::new(3, 5, 0)), Some(BlockType::Stone));

        game.play();
        assert_eq!(
            game.click_button(MouseButton::Primary).unwrap(),
            InteractionOutcome::Removed {
                pos: VoxelPos::new(3, 5, 0),
                block: BlockType::Stone
            }
        );
    }

    #[test]
    fn test_released_pointer_still_allows_clicks() {
        let mut game = Game::new(treeless());
        game.play();
        game.map_mut().insert(VoxelPos::new(3, 5, 0), BlockType::Stone);
        game.release_pointer();
        assert_eq!(game.state(), GameState::Playing);
        assert!(!game.is_active());

        assert_eq!(
            game.click_button(MouseButton::Primary).unwrap(),
            InteractionOutcome::Removed {
                pos: VoxelPos::new(3, 5, 0),
                block: BlockType::Stone
            }
        );
        // Simulation stays paused until the pointer is locked again.
        assert_eq!(game.update(&InputState::default(), 0.5), 0);
    }

    #[test]
    fn test_place_uses_hotbar_selection() {
        let mut game = Game::new(treeless());
        game.play();
        game.map_mut().insert(VoxelPos::new(3, 5, 0), BlockType::Stone);
        assert_eq!(game.handle_key_digit(4), Some(BlockType::Sand));
        assert_eq!(game.handle_key_digit(9), None);
        assert_eq!(game.hud().selected, BlockType::Sand);

        game.click_button(MouseButton::Secondary).unwrap();
        assert_eq!(game.map().get(VoxelPos::new(2, 5, 0)), Some(BlockType::Sand));
    }

    #[test]
    fn test_look_applies_sensitivity() {
        let mut game = Game::new(GameSettings::default());
        game.look(100.0, 0.0).unwrap();
        assert_eq!(game.player().yaw, 0.0);

        game.play();
        game.look(100.0, 50.0).unwrap();
        assert!((game.player().yaw - 0.2).abs() < 1e-6);
        assert!((game.player().pitch + 0.1).abs() < 1e-6);
        assert!(matches!(
            game.look(f32::INFINITY, 0.0),
            Err(Error::NonFiniteInput(_))
        ));
    }

    #[test]
    fn test_visible_voxels_cover_nearby_chunks() {
        let game = Game::new(treeless());
        assert_eq!(game.visible_voxels(2).count(), game.map().len());
        let near: Vec<_> = game.visible_voxels(0).collect();
        assert!(!near.is_empty());
        assert!(near
            .iter()
            .all(|(pos, _)| ChunkPos::of_voxel(*pos) == ChunkPos::new(0, 0)));
    }
}
