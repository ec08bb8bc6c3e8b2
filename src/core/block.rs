use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum BlockType {
    #[default]
    Grass,
    Dirt,
    Stone,
    Sand,
    Snow,
    Water,
    Wood,
    Leaves,
    Iron,
    Coal,
    Gold,
}

impl BlockType {
    pub const ALL: [BlockType; 11] = [
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Stone,
        BlockType::Sand,
        BlockType::Snow,
        BlockType::Water,
        BlockType::Wood,
        BlockType::Leaves,
        BlockType::Iron,
        BlockType::Coal,
        BlockType::Gold,
    ];

    /// Blocks selectable from the hotbar, in slot order (keys 1-6).
    pub const HOTBAR: [BlockType; 6] = [
        BlockType::Grass,
        BlockType::Dirt,
        BlockType::Stone,
        BlockType::Sand,
        BlockType::Snow,
        BlockType::Wood,
    ];

    /// Identifier used by the renderer for texture and material lookup.
    pub fn name(&self) -> &'static str {
        match self {
            BlockType::Grass => "grass",
            BlockType::Dirt => "dirt",
            BlockType::Stone => "stone",
            BlockType::Sand => "sand",
            BlockType::Snow => "snow",
            BlockType::Water => "water",
            BlockType::Wood => "wood",
            BlockType::Leaves => "leaves",
            BlockType::Iron => "iron",
            BlockType::Coal => "coal",
            BlockType::Gold => "gold",
        }
    }

    /// Whether the block obstructs movement and can be mined or placed.
    pub fn is_solid(&self) -> bool {
        !self.is_liquid()
    }

    pub fn is_liquid(&self) -> bool {
        matches!(self, BlockType::Water)
    }

    pub fn is_ore(&self) -> bool {
        matches!(self, BlockType::Iron | BlockType::Coal | BlockType::Gold)
    }

    pub fn on_hotbar(&self) -> bool {
        Self::HOTBAR.contains(self)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        BlockType::ALL
            .into_iter()
            .find(|block| block.name() == wanted)
            .ok_or_else(|| Error::UnknownBlock(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_water_is_liquid() {
        for block in BlockType::ALL {
            assert_eq!(block.is_liquid(), block == BlockType::Water);
            assert_eq!(block.is_solid(), block != BlockType::Water);
        }
    }

    #[test]
    fn test_name_parses_back() {
        for block in BlockType::ALL {
            assert_eq!(block.name().parse::<BlockType>().unwrap(), block);
        }
        assert_eq!(" Gold ".parse::<BlockType>().unwrap(), BlockType::Gold);
        assert!(matches!(
            "obsidian".parse::<BlockType>(),
            Err(Error::UnknownBlock(_))
        ));
    }

    #[test]
    fn test_hotbar_excludes_generated_only_blocks() {
        assert!(BlockType::Wood.on_hotbar());
        assert!(!BlockType::Water.on_hotbar());
        assert!(!BlockType::Leaves.on_hotbar());
        assert!(BlockType::HOTBAR.iter().all(|b| !b.is_ore()));
    }
}
