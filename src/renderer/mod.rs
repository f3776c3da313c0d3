//! Top-down tile renderer
//!
//! Tile → chunks → columns. Each column is scanned into visible samples
//! (`column_scanner`, `sample_builder`) and then painted back to front onto
//! the tile and overlay canvases (`column_compositor`).

pub mod biome_classifier;
pub mod block_atlas_data;
pub mod block_atlas_operations;
pub mod block_handlers;
pub mod column_compositor;
pub mod column_scanner;
pub mod image_ops;
pub mod interfaces;
pub mod overlays;
pub mod render_modes;
pub mod sample_builder;
pub mod tile_renderer_data;
pub mod tile_renderer_operations;

pub use biome_classifier::ChunkBiomeClassifier;
pub use block_atlas_data::{AtlasEntry, BlockAtlas, PaletteEntry};
pub use block_atlas_operations::{
    build_from_palette, create_block_atlas, default_palette, finalize_water, insert_color,
    insert_sprite,
};
pub use block_handlers::{BlockCounter, NoopBlockHandler};
pub use column_compositor::composite_column;
pub use column_scanner::scan_column;
pub use interfaces::{BiomeClassifier, BlockHandler, Overlay, RenderMode, Sprite, SpriteAtlas};
pub use overlays::{HeightOverlay, HighlightOverlay, NoopOverlay, TintOverlay};
pub use render_modes::{DefaultRenderMode, HideBlocksRenderMode};
pub use sample_builder::build_sample;
pub use tile_renderer_data::{BlockSample, Column, RenderedTile, TileRenderer, WaterMode};
pub use tile_renderer_operations::{
    create_tile_renderer, render_chunk, render_tile, render_tile_into, tile_size, with_overlays,
};
