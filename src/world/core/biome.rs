//! Biome ids and the static tables behind biome-dependent block colors.

use super::BlockId;

/// Biome identifier as stored per chunk column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct BiomeId(pub u8);

impl BiomeId {
    pub const OCEAN: BiomeId = BiomeId(0);
    pub const PLAINS: BiomeId = BiomeId(1);
    pub const DESERT: BiomeId = BiomeId(2);
    pub const EXTREME_HILLS: BiomeId = BiomeId(3);
    pub const FOREST: BiomeId = BiomeId(4);
    pub const TAIGA: BiomeId = BiomeId(5);
    pub const SWAMPLAND: BiomeId = BiomeId(6);
    pub const ICE_PLAINS: BiomeId = BiomeId(12);
    pub const JUNGLE: BiomeId = BiomeId(21);

    pub const DEFAULT: BiomeId = BiomeId::PLAINS;
}

impl Default for BiomeId {
    fn default() -> Self {
        BiomeId::DEFAULT
    }
}

/// Which biome color a block picks up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TintKind {
    Grass,
    Foliage,
}

/// Tint colors of one biome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BiomeColors {
    pub grass: [u8; 3],
    pub foliage: [u8; 3],
}

impl BiomeColors {
    pub fn get(&self, kind: TintKind) -> [u8; 3] {
        match kind {
            TintKind::Grass => self.grass,
            TintKind::Foliage => self.foliage,
        }
    }
}

const fn rgb(hex: u32) -> [u8; 3] {
    [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8]
}

const BIOME_TABLE: [(BiomeId, BiomeColors); 9] = [
    (BiomeId::OCEAN, BiomeColors { grass: rgb(0x8eb971), foliage: rgb(0x71a74d) }),
    (BiomeId::PLAINS, BiomeColors { grass: rgb(0x91bd59), foliage: rgb(0x77ab2f) }),
    (BiomeId::DESERT, BiomeColors { grass: rgb(0xbfb755), foliage: rgb(0xaea42a) }),
    (BiomeId::EXTREME_HILLS, BiomeColors { grass: rgb(0x8ab689), foliage: rgb(0x6da36b) }),
    (BiomeId::FOREST, BiomeColors { grass: rgb(0x79c05a), foliage: rgb(0x59ae30) }),
    (BiomeId::TAIGA, BiomeColors { grass: rgb(0x86b783), foliage: rgb(0x68a464) }),
    (BiomeId::SWAMPLAND, BiomeColors { grass: rgb(0x6a7039), foliage: rgb(0x6a7039) }),
    (BiomeId::ICE_PLAINS, BiomeColors { grass: rgb(0x80b497), foliage: rgb(0x60a17b) }),
    (BiomeId::JUNGLE, BiomeColors { grass: rgb(0x59c93c), foliage: rgb(0x30bb0b) }),
];

/// Tint colors for a biome; unknown biomes use the default biome's colors
pub fn biome_colors(biome: BiomeId) -> BiomeColors {
    BIOME_TABLE
        .iter()
        .find(|(id, _)| *id == biome)
        .or_else(|| BIOME_TABLE.iter().find(|(id, _)| *id == BiomeId::DEFAULT))
        .map(|(_, colors)| *colors)
        .unwrap_or(BiomeColors {
            grass: [0xff; 3],
            foliage: [0xff; 3],
        })
}

/// Static table of blocks whose sprite depends on the biome.
/// Lily pads keep their own fixed color.
pub fn biome_tint_kind(id: BlockId, _data: u16) -> Option<TintKind> {
    match id {
        BlockId::GRASS | BlockId::TALL_GRASS | BlockId::DOUBLE_PLANT => Some(TintKind::Grass),
        BlockId::LEAVES | BlockId::LEAVES2 | BlockId::VINES => Some(TintKind::Foliage),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_biome_uses_default_colors() {
        assert_eq!(biome_colors(BiomeId(200)), biome_colors(BiomeId::DEFAULT));
        assert_ne!(biome_colors(BiomeId::DESERT), biome_colors(BiomeId::JUNGLE));
    }

    #[test]
    fn test_tint_table() {
        assert_eq!(biome_tint_kind(BlockId::GRASS, 0), Some(TintKind::Grass));
        assert_eq!(biome_tint_kind(BlockId::LEAVES2, 1), Some(TintKind::Foliage));
        assert_eq!(biome_tint_kind(BlockId::STONE, 0), None);
        assert_eq!(biome_tint_kind(BlockId::LILY_PAD, 0), None);
    }
}
