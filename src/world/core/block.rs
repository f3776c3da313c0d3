use std::fmt;

use crate::constants::water::LEVEL_MASK;

/// Numeric block identifier as stored in chunk data
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct BlockId(pub u16);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display block name if it's a known block
        match *self {
            BlockId::AIR => write!(f, "Air"),
            BlockId::STONE => write!(f, "Stone"),
            BlockId::GRASS => write!(f, "Grass"),
            BlockId::DIRT => write!(f, "Dirt"),
            BlockId::FLOWING_WATER => write!(f, "Flowing Water"),
            BlockId::WATER => write!(f, "Water"),
            BlockId::SAND => write!(f, "Sand"),
            BlockId::LEAVES => write!(f, "Leaves"),
            BlockId::GLASS => write!(f, "Glass"),
            BlockId::TALL_GRASS => write!(f, "Tall Grass"),
            BlockId::VINES => write!(f, "Vines"),
            BlockId::LILY_PAD => write!(f, "Lily Pad"),
            BlockId::LEAVES2 => write!(f, "Leaves"),
            BlockId::DOUBLE_PLANT => write!(f, "Double Plant"),
            _ => write!(f, "Block({})", self.0),
        }
    }
}

impl BlockId {
    pub const AIR: BlockId = BlockId(0);
    pub const STONE: BlockId = BlockId(1);
    pub const GRASS: BlockId = BlockId(2);
    pub const DIRT: BlockId = BlockId(3);
    pub const FLOWING_WATER: BlockId = BlockId(8);
    pub const WATER: BlockId = BlockId(9);
    pub const SAND: BlockId = BlockId(12);
    pub const LEAVES: BlockId = BlockId(18);
    pub const GLASS: BlockId = BlockId(20);
    pub const TALL_GRASS: BlockId = BlockId(31);
    pub const VINES: BlockId = BlockId(106);
    pub const LILY_PAD: BlockId = BlockId(111);
    pub const LEAVES2: BlockId = BlockId(161);
    pub const DOUBLE_PLANT: BlockId = BlockId(175);

    /// Create a new BlockId from a raw u16 value
    pub const fn new(id: u16) -> Self {
        BlockId(id)
    }

    pub const fn is_air(self) -> bool {
        self.0 == 0
    }

    /// Either of the two water ids, regardless of level
    pub const fn is_water(self) -> bool {
        self.0 == Self::FLOWING_WATER.0 || self.0 == Self::WATER.0
    }
}

/// A water block at its maximum fill level. Flowing or partial levels
/// carry a non-zero level nibble and do not count.
pub const fn is_full_water(id: BlockId, data: u16) -> bool {
    id.is_water() && (data & LEVEL_MASK) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::water::OPAQUE_WATER;

    #[test]
    fn test_full_water_ignores_high_bits() {
        assert!(is_full_water(BlockId::WATER, 0));
        assert!(is_full_water(BlockId::FLOWING_WATER, OPAQUE_WATER));
        assert!(!is_full_water(BlockId::WATER, 3));
        assert!(!is_full_water(BlockId::STONE, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(BlockId::GRASS.to_string(), "Grass");
        assert_eq!(BlockId(4000).to_string(), "Block(4000)");
    }
}
