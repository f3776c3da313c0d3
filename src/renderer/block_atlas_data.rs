//! Block Atlas Data
//!
//! Plain data. Construction and lookups live in block_atlas_operations.rs.

use rustc_hash::FxHashMap;

use super::interfaces::Sprite;
use crate::world::core::BlockId;

/// One resolved sprite with its cached transparency
#[derive(Debug, Clone)]
pub struct AtlasEntry {
    pub sprite: Sprite,
    pub transparent: bool,
}

/// Sprites keyed by (block id, data value)
#[derive(Debug, Clone)]
pub struct BlockAtlas {
    pub sprite_size: u32,
    pub entries: FxHashMap<(BlockId, u16), AtlasEntry>,

    /// Returned for ids the atlas knows nothing about
    pub unknown: AtlasEntry,

    pub max_water_depth: u32,
}

/// One row of a color palette: a flat-colored sprite for (id, data)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub id: BlockId,
    pub data: u16,
    pub color: [u8; 4],
}
