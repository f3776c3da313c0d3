//! World data as seen by the tile renderer
//!
//! - `core`: block, biome and coordinate types
//! - `interfaces`: the read-only chunk and world source traits
//! - `storage`: resident in-memory implementations

pub mod core;
pub mod interfaces;
pub mod storage;

pub use self::core::{BiomeId, BlockId, BlockPos, ChunkPos, LocalBlockPos, TilePos};
pub use interfaces::{ChunkView, WorldSource};
pub use storage::{MemoryChunk, MemoryWorld};
