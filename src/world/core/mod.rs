//! Core world data types and fundamental structures
//!
//! Block ids, biome ids and the coordinate types shared by the world
//! sources and the tile renderer.

mod biome;
mod block;
mod position;

pub use biome::{biome_colors, biome_tint_kind, BiomeColors, BiomeId, TintKind};
pub use block::{is_full_water, BlockId};
pub use position::{BlockPos, ChunkPos, LocalBlockPos, TilePos};
