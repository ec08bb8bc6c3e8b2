//! Player-related modules
//! Contains input, kinematics, block selection and block interaction.

pub mod controller;
pub mod hotbar;
pub mod input;
pub mod interaction;

// Re-export commonly used types
pub use controller::{PlayerController, PlayerStats};
pub use hotbar::Hotbar;
pub use input::{ClickEvent, InputState, MouseButton};
pub use interaction::{InteractionOutcome, InteractionSystem};
