//! Policy seams of the tile renderer
//!
//! The renderer queries these per voxel. Atlas and biome classifier are
//! shared read-only between workers. Render modes and overlays take `&self`;
//! one carrying interior state should be instantiated once per worker.

use std::sync::Arc;

use image::RgbaImage;

use crate::world::core::{BiomeId, BlockId, BlockPos};
use crate::world::interfaces::ChunkView;

/// Shared, immutable sprite handle
pub type Sprite = Arc<RgbaImage>;

/// Block id/data to sprite lookup
pub trait SpriteAtlas: Send + Sync {
    /// Edge length of every sprite in pixels
    fn sprite_edge_length(&self) -> u32;

    fn sprite(&self, id: BlockId, data: u16) -> Sprite;

    /// Sprite tinted for the given biome
    fn biome_sprite(&self, id: BlockId, data: u16, biome: BiomeId) -> Sprite;

    fn is_transparent(&self, id: BlockId, data: u16) -> bool;

    /// Consecutive full-water blocks a column may stack before the
    /// depth-bounded water mode replaces them with one opaque sprite
    fn max_water_compaction_depth(&self) -> u32;
}

/// Decides which blocks are left out of the render
pub trait RenderMode: Send + Sync {
    fn is_hidden(&self, pos: BlockPos, id: BlockId, data: u16) -> bool;
}

/// Observes every voxel the column scanner visits, air included
pub trait BlockHandler {
    fn on_block(&mut self, pos: BlockPos, id: BlockId, data: u16);
}

/// An auxiliary layer rendered in parallel with the block sprites
pub trait Overlay: Send + Sync {
    /// Draw this overlay's RGBA contribution for one block into `dest`.
    /// `dest` has the sprite's dimensions and starts out transparent.
    fn draw(&self, sprite: &RgbaImage, dest: &mut RgbaImage, pos: BlockPos, id: BlockId, data: u16);

    /// Whether full-water samples get the real block sprite underneath this
    /// overlay's tint on the overlay canvas
    fn is_base_replacing(&self) -> bool {
        false
    }

    fn name(&self) -> &str;
}

/// Biome lookup for biome-dependent sprites
pub trait BiomeClassifier: Send + Sync {
    fn is_biome_dependent(&self, id: BlockId, data: u16) -> bool;

    fn biome_of(&self, pos: BlockPos, chunk: &dyn ChunkView) -> BiomeId;
}
