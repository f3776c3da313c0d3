//! Sample Builder
//!
//! Resolves the sprite for one visible voxel and prepares its overlay
//! contributions. The resulting [`BlockSample`] is immutable.

use std::sync::Arc;

use image::RgbaImage;

use super::image_ops::{alpha_blit, apply_mask, empty_copy, is_blank};
use super::interfaces::{Overlay, Sprite};
use super::tile_renderer_data::{BlockSample, TileRenderer};
use crate::constants::water::OPAQUE_WATER;
use crate::world::core::{BlockId, BlockPos};
use crate::world::interfaces::ChunkView;

/// Plain or biome-tinted sprite for a block
pub fn resolve_sprite(
    renderer: &TileRenderer,
    chunk: &dyn ChunkView,
    pos: BlockPos,
    id: BlockId,
    data: u16,
) -> Sprite {
    if renderer.biomes.is_biome_dependent(id, data) {
        let biome = renderer.biomes.biome_of(pos, chunk);
        renderer.atlas.biome_sprite(id, data, biome)
    } else {
        renderer.atlas.sprite(id, data)
    }
}

/// Draw the hardcode overlay onto the sprite itself.
///
/// The atlas sprite is only cloned when the overlay actually draws something.
pub fn apply_hardcode_overlay(
    overlay: &dyn Overlay,
    sprite: &mut Sprite,
    pos: BlockPos,
    id: BlockId,
    data: u16,
) {
    let mut delta = empty_copy(&**sprite);
    overlay.draw(&**sprite, &mut delta, pos, id, data);
    if is_blank(&delta) {
        return;
    }
    apply_mask(&mut delta, &**sprite);
    alpha_blit(Arc::make_mut(sprite), &delta, 0, 0);
}

/// Per-overlay deltas, each masked to the sprite's alpha
pub fn draw_overlays(
    overlays: &[Arc<dyn Overlay>],
    sprite: &RgbaImage,
    pos: BlockPos,
    id: BlockId,
    data: u16,
) -> Vec<RgbaImage> {
    overlays
        .iter()
        .map(|overlay| {
            let mut delta = empty_copy(sprite);
            overlay.draw(sprite, &mut delta, pos, id, data);
            apply_mask(&mut delta, sprite);
            delta
        })
        .collect()
}

/// Build the sample for one visible voxel
pub fn build_sample(
    renderer: &TileRenderer,
    chunk: &dyn ChunkView,
    pos: BlockPos,
    id: BlockId,
    data: u16,
    has_full_water: bool,
) -> BlockSample {
    let mut sprite = resolve_sprite(renderer, chunk, pos, id, data);
    apply_hardcode_overlay(renderer.hardcode_overlay.as_ref(), &mut sprite, pos, id, data);
    let overlays = draw_overlays(&renderer.overlays, &sprite, pos, id, data);

    BlockSample {
        pos,
        id,
        data,
        has_full_water,
        sprite,
        overlays,
    }
}

/// Turn the top sample of a water run into the opaque "deep water" sample.
///
/// Position and water flag are kept; sprite and overlays are rebuilt for
/// the opaque water block.
pub fn into_deep_water(renderer: &TileRenderer, sample: BlockSample) -> BlockSample {
    let id = BlockId::FLOWING_WATER;
    let data = OPAQUE_WATER;

    let mut sprite = renderer.atlas.sprite(id, data);
    apply_hardcode_overlay(renderer.hardcode_overlay.as_ref(), &mut sprite, sample.pos, id, data);
    let overlays = draw_overlays(&renderer.overlays, &sprite, sample.pos, id, data);

    BlockSample {
        id,
        data,
        sprite,
        overlays,
        ..sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::overlays::{HighlightOverlay, TintOverlay};
    use crate::renderer::tile_renderer_data::WaterMode;
    use crate::test_support::{renderer_with, test_atlas, SPRITE};
    use crate::world::core::{BiomeId, ChunkPos, LocalBlockPos};
    use crate::world::storage::MemoryChunk;
    use image::Rgba;

    #[test]
    fn test_overlay_delta_is_masked_by_sprite_alpha() {
        // glass sprite with a fully transparent hole
        let mut atlas = test_atlas();
        let mut glass = RgbaImage::from_pixel(SPRITE, SPRITE, Rgba([200, 230, 240, 64]));
        glass.put_pixel(1, 1, Rgba([0, 0, 0, 0]));
        crate::renderer::insert_sprite(&mut atlas, BlockId::GLASS, 0, glass).unwrap();

        let tint: Arc<dyn Overlay> = Arc::new(TintOverlay {
            color: [255, 0, 0, 200],
            base: false,
        });
        let renderer = renderer_with(atlas, WaterMode::Legacy, vec![tint]);
        let chunk = MemoryChunk::new(ChunkPos::new(0, 0));

        let pos = BlockPos::new(0, 0, 10);
        let sample = build_sample(&renderer, &chunk, pos, BlockId::GLASS, 0, false);
        assert_eq!(sample.overlays.len(), 1);
        for (x, y, pixel) in sample.overlays[0].enumerate_pixels() {
            let sprite_alpha = sample.sprite.get_pixel(x, y)[3];
            if sprite_alpha == 0 {
                assert_eq!(*pixel, Rgba([0, 0, 0, 0]));
            } else {
                assert!(pixel[3] <= sprite_alpha);
            }
        }
    }

    #[test]
    fn test_biome_dependent_block_is_tinted() {
        let renderer = renderer_with(test_atlas(), WaterMode::Legacy, Vec::new());
        let mut chunk = MemoryChunk::new(ChunkPos::new(0, 0));
        chunk.set_biome(0, 0, BiomeId::DESERT);
        chunk.set_biome(1, 0, BiomeId::JUNGLE);

        let pos_desert = LocalBlockPos::new(0, 0, 5).to_global(chunk.position);
        let pos_jungle = LocalBlockPos::new(1, 0, 5).to_global(chunk.position);
        let desert = build_sample(&renderer, &chunk, pos_desert, BlockId::GRASS, 0, false);
        let jungle = build_sample(&renderer, &chunk, pos_jungle, BlockId::GRASS, 0, false);
        assert_ne!(desert.sprite.get_pixel(0, 0), jungle.sprite.get_pixel(0, 0));

        let plain = renderer.atlas.sprite(BlockId::GRASS, 0);
        assert_ne!(desert.sprite.get_pixel(0, 0), plain.get_pixel(0, 0));
    }

    #[test]
    fn test_hardcode_overlay_modifies_only_sample_sprite() {
        let magenta = [255, 0, 255, 255];
        let mut renderer = renderer_with(test_atlas(), WaterMode::Legacy, Vec::new());
        renderer.hardcode_overlay = Arc::new(HighlightOverlay::new([BlockId::STONE], magenta));
        let chunk = MemoryChunk::new(ChunkPos::new(0, 0));

        let pos = BlockPos::new(0, 0, 1);
        let stone = build_sample(&renderer, &chunk, pos, BlockId::STONE, 0, false);
        assert_eq!(*stone.sprite.get_pixel(0, 0), Rgba(magenta));
        // the atlas copy is untouched
        let atlas_stone = renderer.atlas.sprite(BlockId::STONE, 0);
        assert_ne!(*atlas_stone.get_pixel(0, 0), Rgba(magenta));

        let sand = build_sample(&renderer, &chunk, BlockPos::new(0, 0, 1), BlockId::SAND, 0, false);
        assert!(Arc::ptr_eq(&sand.sprite, &renderer.atlas.sprite(BlockId::SAND, 0)));
    }

    #[test]
    fn test_into_deep_water_keeps_position() {
        let renderer = renderer_with(test_atlas(), WaterMode::Preblit, Vec::new());
        let chunk = MemoryChunk::new(ChunkPos::new(0, 0));
        let pos = BlockPos::new(3, 4, 60);

        let water = build_sample(&renderer, &chunk, pos, BlockId::WATER, 0, false);
        let deep = into_deep_water(&renderer, water);
        assert!(deep.is_deep_water());
        assert_eq!(deep.pos, pos);
        assert!(deep.sprite.pixels().all(|p| p[3] == 255));
    }
}
