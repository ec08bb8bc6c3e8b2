//! Error types for the boundaries of the simulation.
//!
//! The simulation itself never fails; these cover malformed input from the
//! input collaborator, hotbar selection and settings files.

use thiserror::Error;

use crate::core::block::BlockType;

#[derive(Error, Debug)]
pub enum Error {
    /// A position, ray or look delta contained NaN or infinity.
    #[error("non-finite value in {0}")]
    NonFiniteInput(&'static str),

    /// A view ray had no direction.
    #[error("view direction has zero length")]
    ZeroDirection,

    /// The block cannot be picked from the hotbar.
    #[error("{0} is not on the hotbar")]
    NotOnHotbar(BlockType),

    #[error("unknown block type: {0}")]
    UnknownBlock(String),

    #[error("settings file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings file is malformed: {0}")]
    Settings(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
