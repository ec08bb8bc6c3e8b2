//! Configuration helpers.

pub mod settings;

pub use settings::{GameSettings, load_or_default, load_settings, save_settings};
