//! Tile Renderer Data
//!
//! The renderer configuration and the per-column sample types. Scanning,
//! compositing and the tile loop operate on these from their own modules.

use std::sync::Arc;

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use super::interfaces::{BiomeClassifier, Overlay, RenderMode, Sprite, SpriteAtlas};
use crate::constants::water::OPAQUE_WATER;
use crate::world::core::{BlockId, BlockPos};

/// How columns handle stacked full-water blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterMode {
    /// Collapse consecutive full-water blocks into the first one of the run
    /// and keep scanning below
    Legacy,
    /// Stack individual water blocks up to the atlas' compaction depth, then
    /// replace the run with one opaque deep-water sample
    #[default]
    Preblit,
}

/// One visible voxel of a column, ready to composite
#[derive(Debug, Clone)]
pub struct BlockSample {
    pub pos: BlockPos,
    pub id: BlockId,
    pub data: u16,

    /// A full-water block was seen at or above this sample (legacy mode)
    pub has_full_water: bool,

    pub sprite: Sprite,

    /// Masked overlay contributions, one per active overlay
    pub overlays: Vec<RgbaImage>,
}

impl BlockSample {
    /// Synthetic sample standing in for a truncated deep water run
    pub fn is_deep_water(&self) -> bool {
        self.id == BlockId::FLOWING_WATER && self.data == OPAQUE_WATER
    }
}

/// Visible samples of one column, shallowest first
#[derive(Debug, Clone, Default)]
pub struct Column {
    pub samples: Vec<BlockSample>,
}

impl Column {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Everything needed to turn chunks into one tile plus its overlay tiles.
///
/// Holds no per-render state; the chunk being drawn and the block handler
/// are passed into each call.
pub struct TileRenderer {
    pub atlas: Arc<dyn SpriteAtlas>,
    pub render_mode: Arc<dyn RenderMode>,
    pub biomes: Arc<dyn BiomeClassifier>,

    /// Applied directly onto every sprite before anything else
    pub hardcode_overlay: Arc<dyn Overlay>,

    /// Optional overlays, each rendered to its own canvas
    pub overlays: Vec<Arc<dyn Overlay>>,

    /// Chunks per tile edge
    pub tile_width: u32,

    pub water_mode: WaterMode,
}

impl std::fmt::Debug for TileRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TileRenderer")
            .field("sprite_edge_length", &self.atlas.sprite_edge_length())
            .field("hardcode_overlay", &self.hardcode_overlay.name())
            .field(
                "overlays",
                &self.overlays.iter().map(|o| o.name()).collect::<Vec<_>>(),
            )
            .field("tile_width", &self.tile_width)
            .field("water_mode", &self.water_mode)
            .finish()
    }
}

/// A rendered tile and one canvas per overlay, in overlay order
#[derive(Debug, Clone)]
pub struct RenderedTile {
    pub tile: RgbaImage,
    pub overlays: Vec<RgbaImage>,
}
