use glam::Vec3;

use crate::error::{Error, Result};

/// Normalized movement keys for one tick.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputState {
    /// Builds the state from the names of the keys currently held
    /// (`w`, `a`, `s`, `d`, and space for jump). Unknown keys are ignored.
    pub fn from_pressed<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut input = InputState::default();
        for key in keys {
            match key.as_ref().to_ascii_lowercase().as_str() {
                "w" => input.forward = true,
                "s" => input.backward = true,
                "a" => input.left = true,
                "d" => input.right = true,
                " " | "space" => input.jump = true,
                _ => {}
            }
        }
        input
    }

    pub fn is_moving(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Removes the targeted block.
    Primary,
    /// Places the selected block against the targeted face.
    Secondary,
}

impl MouseButton {
    /// Maps a DOM-style button index (0 = left, 2 = right).
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(MouseButton::Primary),
            2 => Some(MouseButton::Secondary),
            _ => None,
        }
    }
}

/// A click together with the view ray it was issued along.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent {
    pub button: MouseButton,
    pub origin: Vec3,
    pub direction: Vec3,
}

impl ClickEvent {
    /// Validates the ray; the simulation only ever sees finite, non-zero rays.
    pub fn new(button: MouseButton, origin: Vec3, direction: Vec3) -> Result<Self> {
        if !origin.is_finite() {
            return Err(Error::NonFiniteInput("click origin"));
        }
        if !direction.is_finite() {
            return Err(Error::NonFiniteInput("click direction"));
        }
        let direction = direction.try_normalize().ok_or(Error::ZeroDirection)?;
        Ok(ClickEvent {
            button,
            origin,
            direction,
        })
    }
}
