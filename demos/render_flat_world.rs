//! Render a small generated world to PNG tiles
//!
//! Usage: render_flat_world [config.toml] [output_dir]
//!
//! Builds a 4x4 chunk island with a lake and some trees, then writes the
//! base tile and every overlay tile for each 2x2 tile of it.

use hearth_tiles::{
    render_tile, save_png, BiomeId, BlockCounter, BlockId, ChunkPos, LocalBlockPos, MemoryChunk,
    MemoryWorld, Overlay, TilePos, TileRenderConfig,
};
use std::path::PathBuf;

const WORLD_CHUNKS: i32 = 4;
const SEA_LEVEL: i32 = 62;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let mut config = match args.next() {
        Some(path) => TileRenderConfig::load(path)?,
        None => TileRenderConfig::default(),
    };
    let output_dir = PathBuf::from(args.next().unwrap_or_else(|| "tiles".to_string()));
    config.render.tile_width = 2;

    let renderer = config.build_renderer()?;
    let world = build_world();
    log::info!("Generated {} chunks", world.len());

    let tiles = WORLD_CHUNKS / config.render.tile_width as i32;
    let mut counter = BlockCounter::default();
    for tx in 0..tiles {
        for ty in 0..tiles {
            let rendered = render_tile(&renderer, &world, TilePos::new(tx, ty), &mut counter);
            save_png(&rendered.tile, output_dir.join(format!("{}_{}.png", tx, ty)))?;
            for (overlay, image) in renderer.overlays.iter().zip(&rendered.overlays) {
                let path = output_dir.join(overlay.name()).join(format!("{}_{}.png", tx, ty));
                save_png(image, path)?;
            }
        }
    }

    println!(
        "Rendered {} tiles into {} ({} voxels visited, {} water)",
        tiles * tiles,
        output_dir.display(),
        counter.visited,
        counter.count(BlockId::WATER)
    );
    Ok(())
}

fn build_world() -> MemoryWorld {
    let world = MemoryWorld::new();
    let center = (WORLD_CHUNKS * 16 / 2) as f32;

    for cx in 0..WORLD_CHUNKS {
        for cz in 0..WORLD_CHUNKS {
            let mut chunk = MemoryChunk::new(ChunkPos::new(cx, cz));
            for x in 0..16 {
                for z in 0..16 {
                    let gx = (cx * 16 + x) as f32;
                    let gz = (cz * 16 + z) as f32;
                    let distance = ((gx - center).powi(2) + (gz - center).powi(2)).sqrt();
                    let height = SEA_LEVEL + 6 - (distance / 4.0) as i32;

                    chunk.fill_column(x, z, 0, height.max(1) - 1, BlockId::STONE, 0);
                    if height > SEA_LEVEL {
                        chunk.set_block(LocalBlockPos::new(x, z, height), BlockId::GRASS, 0);
                        if (cx * 16 + x) % 11 == 3 && (cz * 16 + z) % 9 == 4 {
                            chunk.fill_column(x, z, height + 1, height + 3, BlockId::LEAVES, 0);
                        }
                    } else {
                        chunk.set_block(LocalBlockPos::new(x, z, height), BlockId::SAND, 0);
                        chunk.fill_column(x, z, height + 1, SEA_LEVEL, BlockId::WATER, 0);
                    }
                    if distance > center * 0.8 {
                        chunk.set_biome(x, z, BiomeId::SWAMPLAND);
                    }
                }
            }
            world.insert(chunk);
        }
    }
    world
}
