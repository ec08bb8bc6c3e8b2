//! Application module containing the play session and its fixed-step loop

mod game;

pub use game::{Game, GameState, HudStats};
