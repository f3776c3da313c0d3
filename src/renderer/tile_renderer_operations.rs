//! Tile Renderer Operations
//!
//! The chunk and tile loops. A tile covers `tile_width` x `tile_width`
//! chunks; chunk (x, z) of the tile lands at pixel origin
//! (x, z) * sprite_edge_length * 16.

use std::sync::Arc;

use image::RgbaImage;

use super::biome_classifier::ChunkBiomeClassifier;
use super::column_compositor::composite_column;
use super::column_scanner::scan_column;
use super::interfaces::{BlockHandler, Overlay, SpriteAtlas};
use super::overlays::NoopOverlay;
use super::render_modes::DefaultRenderMode;
use super::tile_renderer_data::{RenderedTile, TileRenderer, WaterMode};
use crate::constants::core::CHUNK_WIDTH;
use crate::world::core::{ChunkPos, TilePos};
use crate::world::interfaces::{ChunkView, WorldSource};

/// Renderer with the default policies: nothing hidden, chunk biomes,
/// no overlays
pub fn create_tile_renderer(
    atlas: Arc<dyn SpriteAtlas>,
    tile_width: u32,
    water_mode: WaterMode,
) -> TileRenderer {
    TileRenderer {
        atlas,
        render_mode: Arc::new(DefaultRenderMode),
        biomes: Arc::new(ChunkBiomeClassifier),
        hardcode_overlay: Arc::new(NoopOverlay),
        overlays: Vec::new(),
        tile_width,
        water_mode,
    }
}

/// Replace the optional overlay list
pub fn with_overlays(mut renderer: TileRenderer, overlays: Vec<Arc<dyn Overlay>>) -> TileRenderer {
    renderer.overlays = overlays;
    renderer
}

/// Side length of a tile and of each overlay tile in pixels
pub fn tile_size(renderer: &TileRenderer) -> u32 {
    renderer.atlas.sprite_edge_length() * CHUNK_WIDTH as u32 * renderer.tile_width
}

/// Render every column of `chunk` with its top-left corner at (dx, dz)
pub fn render_chunk(
    renderer: &TileRenderer,
    chunk: &dyn ChunkView,
    tile: &mut RgbaImage,
    overlay_tiles: &mut [RgbaImage],
    dx: u32,
    dz: u32,
    handler: &mut dyn BlockHandler,
) {
    let edge = renderer.atlas.sprite_edge_length();
    for x in 0..CHUNK_WIDTH {
        for z in 0..CHUNK_WIDTH {
            let column = scan_column(renderer, chunk, x, z, handler);
            if column.is_empty() {
                continue;
            }
            let image_x = dx + x as u32 * edge;
            let image_y = dz + z as u32 * edge;
            composite_column(column, &renderer.overlays, tile, overlay_tiles, image_x, image_y);
        }
    }
}

/// Render a tile into caller-owned canvases, resizing and clearing them.
///
/// # Panics
///
/// Panics if `overlay_tiles` does not hold exactly one canvas per overlay.
/// That is an integration fault, checked before any pixel is written.
pub fn render_tile_into<W: WorldSource>(
    renderer: &TileRenderer,
    world: &W,
    tile_pos: TilePos,
    tile: &mut RgbaImage,
    overlay_tiles: &mut [RgbaImage],
    handler: &mut dyn BlockHandler,
) {
    assert_eq!(
        renderer.overlays.len(),
        overlay_tiles.len(),
        "one overlay canvas is required per overlay"
    );

    let size = tile_size(renderer);
    *tile = RgbaImage::new(size, size);
    for overlay_tile in overlay_tiles.iter_mut() {
        *overlay_tile = RgbaImage::new(size, size);
    }

    let chunk_pixels = renderer.atlas.sprite_edge_length() * CHUNK_WIDTH as u32;
    let tile_width = renderer.tile_width as i32;
    let mut present = 0;
    for x in 0..tile_width {
        for z in 0..tile_width {
            let chunk_pos = ChunkPos::new(tile_pos.x * tile_width + x, tile_pos.y * tile_width + z);
            let Some(chunk) = world.chunk_for(chunk_pos) else {
                log::trace!("[tile_renderer::render_tile] No chunk at {:?}", chunk_pos);
                continue;
            };
            present += 1;
            render_chunk(
                renderer,
                chunk.as_ref(),
                tile,
                overlay_tiles,
                chunk_pixels * x as u32,
                chunk_pixels * z as u32,
                handler,
            );
        }
    }

    log::debug!(
        "[tile_renderer::render_tile] Tile {:?}: {} of {} chunks present, {}px, {} overlays",
        tile_pos,
        present,
        tile_width * tile_width,
        size,
        overlay_tiles.len()
    );
}

/// Render a tile into freshly allocated canvases
pub fn render_tile<W: WorldSource>(
    renderer: &TileRenderer,
    world: &W,
    tile_pos: TilePos,
    handler: &mut dyn BlockHandler,
) -> RenderedTile {
    let mut tile = RgbaImage::new(0, 0);
    let mut overlays = vec![RgbaImage::new(0, 0); renderer.overlays.len()];
    render_tile_into(renderer, world, tile_pos, &mut tile, &mut overlays, handler);
    RenderedTile { tile, overlays }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::block_handlers::NoopBlockHandler;
    use crate::renderer::overlays::HeightOverlay;
    use crate::test_support::{renderer_with, test_atlas, SPRITE};
    use crate::world::core::{BlockId, LocalBlockPos};
    use crate::world::storage::{MemoryChunk, MemoryWorld};
    use image::Rgba;

    #[test]
    fn test_tile_size() {
        let mut renderer = renderer_with(test_atlas(), WaterMode::Preblit, Vec::new());
        assert_eq!(tile_size(&renderer), SPRITE * 16);
        renderer.tile_width = 3;
        assert_eq!(tile_size(&renderer), SPRITE * 16 * 3);
    }

    #[test]
    fn test_with_overlays_replaces_list() {
        let renderer = renderer_with(test_atlas(), WaterMode::Preblit, Vec::new());
        let overlays: Vec<Arc<dyn Overlay>> = vec![Arc::new(HeightOverlay::default())];
        let renderer = with_overlays(renderer, overlays);
        assert_eq!(renderer.overlays.len(), 1);
        assert_eq!(renderer.overlays[0].name(), "height");
    }

    #[test]
    fn test_render_chunk_offsets_columns() {
        let renderer = renderer_with(test_atlas(), WaterMode::Preblit, Vec::new());
        let mut chunk = MemoryChunk::new(ChunkPos::new(0, 0));
        chunk.set_block(LocalBlockPos::new(2, 5, 64), BlockId::STONE, 0);

        let size = SPRITE * 16 * 2;
        let mut tile = RgbaImage::new(size, size);
        let dx = SPRITE * 16;
        render_chunk(&renderer, &chunk, &mut tile, &mut [], dx, 0, &mut NoopBlockHandler);

        let stone = renderer.atlas.sprite(BlockId::STONE, 0);
        assert_eq!(tile.get_pixel(dx + 2 * SPRITE, 5 * SPRITE), stone.get_pixel(0, 0));
        assert_eq!(tile.get_pixel(dx + 2 * SPRITE - 1, 5 * SPRITE)[3], 0);
        assert_eq!(tile.get_pixel(2 * SPRITE, 5 * SPRITE)[3], 0);
    }

    #[test]
    fn test_render_tile_into_resizes_canvases() {
        let overlays: Vec<Arc<dyn Overlay>> = vec![Arc::new(HeightOverlay::default())];
        let renderer = renderer_with(test_atlas(), WaterMode::Preblit, overlays);
        let world = MemoryWorld::new();

        let mut tile = RgbaImage::from_pixel(3, 3, Rgba([1, 1, 1, 255]));
        let mut overlay_tiles = vec![RgbaImage::new(1, 1)];
        render_tile_into(
            &renderer,
            &world,
            TilePos::new(0, 0),
            &mut tile,
            &mut overlay_tiles,
            &mut NoopBlockHandler,
        );

        assert_eq!(tile.dimensions(), (SPRITE * 16, SPRITE * 16));
        assert_eq!(overlay_tiles[0].dimensions(), (SPRITE * 16, SPRITE * 16));
        assert!(tile.pixels().all(|p| p[3] == 0));
    }

    #[test]
    #[should_panic(expected = "one overlay canvas is required per overlay")]
    fn test_overlay_count_mismatch_panics() {
        let overlays: Vec<Arc<dyn Overlay>> = vec![Arc::new(HeightOverlay::default())];
        let renderer = renderer_with(test_atlas(), WaterMode::Preblit, overlays);
        let world = MemoryWorld::new();

        let mut tile = RgbaImage::new(0, 0);
        render_tile_into(
            &renderer,
            &world,
            TilePos::new(0, 0),
            &mut tile,
            &mut [],
            &mut NoopBlockHandler,
        );
    }

    #[test]
    fn test_tile_maps_chunks_to_footprint() {
        let mut renderer = renderer_with(test_atlas(), WaterMode::Preblit, Vec::new());
        renderer.tile_width = 2;
        let world = MemoryWorld::new();
        // tile (1, -1) with width 2 covers chunks x 2..=3, z -2..=-1
        let mut chunk = MemoryChunk::new(ChunkPos::new(3, -2));
        chunk.fill_layer(10, BlockId::SAND, 0);
        world.insert(chunk);
        // outside the tile
        let mut other = MemoryChunk::new(ChunkPos::new(0, 0));
        other.fill_layer(10, BlockId::STONE, 0);
        world.insert(other);

        let rendered = render_tile(&renderer, &world, TilePos::new(1, -1), &mut NoopBlockHandler);
        let chunk_pixels = SPRITE * 16;
        let sand = renderer.atlas.sprite(BlockId::SAND, 0);
        for (x, y, pixel) in rendered.tile.enumerate_pixels() {
            if x >= chunk_pixels && y < chunk_pixels {
                assert_eq!(pixel, sand.get_pixel(0, 0));
            } else {
                assert_eq!(pixel[3], 0);
            }
        }
    }
}
