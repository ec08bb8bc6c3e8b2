//! Voxelcraft headless session
//!
//! Runs the simulation without a window, driving the player from the command
//! line and logging HUD stats as it goes.

use std::path::PathBuf;

use clap::Parser;
use voxelcraft::utils::settings::{default_settings_path, load_or_default, save_settings};
use voxelcraft::{Game, InputState, InteractionOutcome, MouseButton};

/// Voxel world simulation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// World seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of simulation ticks to run
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Settings file (defaults to the per-user config directory)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Write the effective settings back to the settings file
    #[arg(long, default_value_t = false)]
    save_settings: bool,

    /// Hold the forward key for the whole run
    #[arg(long, default_value_t = false)]
    walk: bool,

    /// Press jump every N ticks
    #[arg(long)]
    jump_every: Option<u64>,

    /// Initial heading in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    yaw: f32,

    /// Initial pitch in degrees, negative looks down
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pitch: f32,

    /// Click every N ticks
    #[arg(long)]
    click_every: Option<u64>,

    /// Clicks place the selected block instead of removing
    #[arg(long, default_value_t = false)]
    place: bool,

    /// Hotbar slot (1-6) to select before starting
    #[arg(long)]
    slot: Option<u8>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting voxelcraft headless session...");
    if let Err(e) = run(Args::parse()) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn every(n: Option<u64>, tick: u64) -> bool {
    matches!(n, Some(n) if n > 0 && tick % n == 0)
}

fn run(args: Args) -> voxelcraft::Result<()> {
    let path = args.settings.clone().unwrap_or_else(default_settings_path);
    let mut settings = load_or_default(&path)?;
    if let Some(seed) = args.seed {
        settings.world.seed = seed;
    }
    if args.save_settings {
        save_settings(&path, &settings)?;
        tracing::info!("Settings saved to {}", path.display());
    }

    let report_every = u64::from(settings.simulation.tick_rate.max(1));
    let mut game = Game::new(settings);
    if let Some(slot) = args.slot {
        if game.handle_key_digit(slot).is_none() {
            tracing::warn!("Slot {} is not on the hotbar, keeping {}", slot, game.hud().selected);
        }
    }
    game.play();
    {
        let player = game.player_mut();
        player.yaw = args.yaw.to_radians().rem_euclid(std::f32::consts::TAU);
        player.look(0.0, -args.pitch.to_radians());
    }

    let button = if args.place {
        MouseButton::Secondary
    } else {
        MouseButton::Primary
    };

    for tick in 1..=args.ticks {
        let input = InputState {
            forward: args.walk,
            jump: every(args.jump_every, tick),
            ..InputState::default()
        };
        game.tick(&input);

        if every(args.click_every, tick) {
            match game.click_button(button)? {
                InteractionOutcome::Missed => tracing::debug!("Click at tick {} missed", tick),
                outcome => tracing::info!("Tick {}: {:?}", tick, outcome),
            }
        }

        if tick % report_every == 0 {
            let hud = game.hud();
            tracing::info!(
                "Tick {}: pos {:?}, health {}, hunger {}, holding {}",
                tick,
                game.position(),
                hud.health,
                hud.hunger,
                hud.selected
            );
        }

        if game.player().is_dead() {
            tracing::info!("Player died, ending session at tick {}", tick);
            break;
        }
    }

    tracing::info!(
        "Session finished: {} ticks, {} chunks, {} voxels",
        game.ticks(),
        game.chunks().generated_count(),
        game.map().len()
    );
    Ok(())
}
