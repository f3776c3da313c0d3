//! Shared fixtures for unit tests

use std::sync::Arc;

use crate::renderer::{
    build_from_palette, create_tile_renderer, default_palette, BlockAtlas, Overlay, TileRenderer,
    WaterMode,
};

/// Sprite edge length used by test atlases
pub const SPRITE: u32 = 4;

/// Built-in palette at test sprite size
pub fn test_atlas() -> BlockAtlas {
    build_from_palette(SPRITE, &default_palette(), None)
}

/// Single-chunk renderer with default policies
pub fn renderer_with(
    atlas: BlockAtlas,
    water_mode: WaterMode,
    overlays: Vec<Arc<dyn Overlay>>,
) -> TileRenderer {
    let mut renderer = create_tile_renderer(Arc::new(atlas), 1, water_mode);
    renderer.overlays = overlays;
    renderer
}
