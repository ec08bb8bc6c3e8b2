use crate::core::block::BlockType;
use crate::error::{Error, Result};

/// Currently selected building block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hotbar {
    selected: BlockType,
}

impl Hotbar {
    pub fn selected(&self) -> BlockType {
        self.selected
    }

    /// Number keys 1-6 pick a hotbar slot; anything else leaves the
    /// selection alone and returns `None`.
    pub fn select_slot(&mut self, digit: u8) -> Option<BlockType> {
        let slot = usize::from(digit).checked_sub(1)?;
        let block = *BlockType::HOTBAR.get(slot)?;
        self.selected = block;
        Some(block)
    }

    pub fn select(&mut self, block: BlockType) -> Result<()> {
        if !block.on_hotbar() {
            return Err(Error::NotOnHotbar(block));
        }
        self.selected = block;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_grass() {
        assert_eq!(Hotbar::default().selected(), BlockType::Grass);
    }

    #[test]
    fn test_digit_slots() {
        let mut hotbar = Hotbar::default();
        assert_eq!(hotbar.select_slot(6), Some(BlockType::Wood));
        assert_eq!(hotbar.select_slot(3), Some(BlockType::Stone));
        assert_eq!(hotbar.select_slot(0), None);
        assert_eq!(hotbar.select_slot(7), None);
        assert_eq!(hotbar.selected(), BlockType::Stone);
    }

    #[test]
    fn test_explicit_selection() {
        let mut hotbar = Hotbar::default();
        hotbar.select(BlockType::Sand).unwrap();
        assert_eq!(hotbar.selected(), BlockType::Sand);
        assert!(matches!(
            hotbar.select(BlockType::Water),
            Err(Error::NotOnHotbar(BlockType::Water))
        ));
        assert_eq!(hotbar.selected(), BlockType::Sand);
    }
}
