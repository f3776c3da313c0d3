//! Block Atlas Operations
//!
//! Building a [`BlockAtlas`] from flat colors or images, deriving the deep
//! water sprite, and the [`SpriteAtlas`] lookups used by the renderer.

use std::sync::Arc;

use image::{Rgba, RgbaImage};
use rustc_hash::FxHashMap;

use super::block_atlas_data::{AtlasEntry, BlockAtlas, PaletteEntry};
use super::image_ops::{alpha_blit, has_transparency, tint_rgb};
use super::interfaces::{Sprite, SpriteAtlas};
use crate::constants::atlas::DEFAULT_WATER_ALPHA;
use crate::constants::water::{MAX_WATER_PREBLIT, OPAQUE_WATER};
use crate::error::{TileError, TileResult};
use crate::world::core::{biome_colors, biome_tint_kind, BiomeId, BlockId};

/// Create an empty atlas; every lookup resolves to the transparent unknown sprite
pub fn create_block_atlas(sprite_size: u32) -> BlockAtlas {
    BlockAtlas {
        sprite_size,
        entries: FxHashMap::default(),
        unknown: AtlasEntry {
            sprite: Arc::new(RgbaImage::new(sprite_size, sprite_size)),
            transparent: true,
        },
        max_water_depth: MAX_WATER_PREBLIT,
    }
}

/// Register a sprite image for (id, data)
pub fn insert_sprite(
    atlas: &mut BlockAtlas,
    id: BlockId,
    data: u16,
    image: RgbaImage,
) -> TileResult<()> {
    if image.width() != atlas.sprite_size || image.height() != atlas.sprite_size {
        return Err(TileError::invalid_config(
            format!("atlas sprite {}:{}", id.0, data),
            format!("{}x{}", image.width(), image.height()),
            format!("sprites must be {0}x{0}", atlas.sprite_size),
        ));
    }

    let transparent = has_transparency(&image);
    atlas.entries.insert(
        (id, data),
        AtlasEntry {
            sprite: Arc::new(image),
            transparent,
        },
    );
    Ok(())
}

/// Register a flat-colored sprite for (id, data)
pub fn insert_color(atlas: &mut BlockAtlas, id: BlockId, data: u16, color: [u8; 4]) {
    let image = RgbaImage::from_pixel(atlas.sprite_size, atlas.sprite_size, Rgba(color));
    atlas.entries.insert(
        (id, data),
        AtlasEntry {
            sprite: Arc::new(image),
            transparent: color[3] < 255,
        },
    );
}

/// Build an atlas from a color palette and derive the deep water sprites
pub fn build_from_palette(
    sprite_size: u32,
    palette: &[PaletteEntry],
    max_water_override: Option<u32>,
) -> BlockAtlas {
    let mut atlas = create_block_atlas(sprite_size);
    for entry in palette {
        insert_color(&mut atlas, entry.id, entry.data, entry.color);
    }
    finalize_water(&mut atlas, max_water_override);

    log::debug!(
        "[block_atlas_operations::build_from_palette] {} sprites at {}px, max water depth {}",
        atlas.entries.len(),
        sprite_size,
        atlas.max_water_depth
    );
    atlas
}

/// Number of stacked layers of a sprite with the given alpha until the
/// accumulated alpha stops growing, capped at `MAX_WATER_PREBLIT`
pub fn water_compaction_depth(alpha: u8) -> u32 {
    let alpha = alpha as u32;
    if alpha == 0 {
        return MAX_WATER_PREBLIT;
    }

    let mut accumulated = 0u32;
    let mut layers = 0;
    while accumulated < 255 && layers < MAX_WATER_PREBLIT {
        let added = alpha * (255 - accumulated) / 255;
        if added == 0 {
            break;
        }
        accumulated += added;
        layers += 1;
    }
    layers
}

/// The view into `layers` stacked water blocks, made fully opaque
pub fn build_opaque_water(water: &RgbaImage, layers: u32) -> RgbaImage {
    let mut opaque = RgbaImage::new(water.width(), water.height());
    for _ in 0..layers.max(1) {
        alpha_blit(&mut opaque, water, 0, 0);
    }
    for pixel in opaque.pixels_mut() {
        if pixel[3] > 0 {
            pixel[3] = 255;
        }
    }
    opaque
}

/// Compute the water compaction depth and register the opaque water
/// sprites for both water ids
pub fn finalize_water(atlas: &mut BlockAtlas, max_water_override: Option<u32>) {
    let water = [BlockId::WATER, BlockId::FLOWING_WATER]
        .iter()
        .find_map(|id| atlas.entries.get(&(*id, 0)))
        .map(|entry| entry.sprite.clone());

    let Some(water) = water else {
        log::warn!(
            "[block_atlas_operations::finalize_water] No water sprite registered; \
             deep water renders as unknown"
        );
        atlas.max_water_depth = max_water_override.unwrap_or(MAX_WATER_PREBLIT);
        return;
    };

    let min_alpha = water
        .pixels()
        .map(|p| p[3])
        .filter(|a| *a > 0)
        .min()
        .unwrap_or(0);
    let computed = water_compaction_depth(min_alpha);
    atlas.max_water_depth = max_water_override.unwrap_or(computed);

    let opaque = Arc::new(build_opaque_water(&water, computed));
    for id in [BlockId::FLOWING_WATER, BlockId::WATER] {
        atlas.entries.insert(
            (id, OPAQUE_WATER),
            AtlasEntry {
                sprite: opaque.clone(),
                transparent: false,
            },
        );
    }
}

/// Resolve (id, data), falling back to (id, 0) and then to the unknown sprite
pub fn lookup(atlas: &BlockAtlas, id: BlockId, data: u16) -> &AtlasEntry {
    atlas
        .entries
        .get(&(id, data))
        .or_else(|| atlas.entries.get(&(id, 0)))
        .unwrap_or(&atlas.unknown)
}

/// Built-in palette covering common terrain blocks
pub fn default_palette() -> Vec<PaletteEntry> {
    let entry = |id: BlockId, color: [u8; 4]| PaletteEntry { id, data: 0, color };
    vec![
        entry(BlockId::STONE, [125, 125, 125, 255]),
        // biome tinted blocks are stored in gray and multiplied at lookup
        entry(BlockId::GRASS, [220, 220, 220, 255]),
        entry(BlockId::DIRT, [134, 96, 67, 255]),
        entry(BlockId::FLOWING_WATER, [47, 67, 244, DEFAULT_WATER_ALPHA]),
        entry(BlockId::WATER, [47, 67, 244, DEFAULT_WATER_ALPHA]),
        entry(BlockId::SAND, [219, 211, 160, 255]),
        entry(BlockId::LEAVES, [190, 190, 190, 255]),
        entry(BlockId::GLASS, [200, 230, 240, 64]),
        entry(BlockId::TALL_GRASS, [210, 210, 210, 160]),
        entry(BlockId::VINES, [180, 180, 180, 128]),
        entry(BlockId::LILY_PAD, [32, 128, 48, 255]),
        entry(BlockId::LEAVES2, [190, 190, 190, 255]),
        entry(BlockId::DOUBLE_PLANT, [210, 210, 210, 160]),
    ]
}

impl SpriteAtlas for BlockAtlas {
    fn sprite_edge_length(&self) -> u32 {
        self.sprite_size
    }

    fn sprite(&self, id: BlockId, data: u16) -> Sprite {
        lookup(self, id, data).sprite.clone()
    }

    fn biome_sprite(&self, id: BlockId, data: u16, biome: BiomeId) -> Sprite {
        let sprite = self.sprite(id, data);
        match biome_tint_kind(id, data) {
            Some(kind) => {
                let mut tinted = (*sprite).clone();
                tint_rgb(&mut tinted, biome_colors(biome).get(kind));
                Arc::new(tinted)
            }
            None => sprite,
        }
    }

    fn is_transparent(&self, id: BlockId, data: u16) -> bool {
        lookup(self, id, data).transparent
    }

    fn max_water_compaction_depth(&self) -> u32 {
        self.max_water_depth
    }
}
