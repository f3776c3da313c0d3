// Hearth Tiles - top-down map tiles from block worlds
//
// Data and operations are kept apart:
// - *_data modules hold plain structures
// - *_operations modules hold the functions that transform them
// - traits only at the policy seams (atlas, render mode, overlays, biomes)

// Constants module
pub mod constants;

pub mod config;
pub mod error;
pub mod output;
pub mod renderer;
pub mod world;

#[cfg(test)]
mod test_support;

pub use config::{AtlasSection, BlockColorConfig, OverlayConfig, RenderSection, TileRenderConfig};
pub use error::{ErrorContext, TileError, TileResult};
pub use output::save_png;
pub use renderer::{
    create_tile_renderer, render_chunk, render_tile, render_tile_into, tile_size, BiomeClassifier,
    BlockAtlas, BlockCounter, BlockHandler, NoopBlockHandler, Overlay, RenderMode, RenderedTile,
    SpriteAtlas, TileRenderer, WaterMode,
};
pub use world::core::{BiomeId, BlockId, BlockPos, ChunkPos, LocalBlockPos, TilePos};
pub use world::interfaces::{ChunkView, WorldSource};
pub use world::storage::{MemoryChunk, MemoryWorld};
