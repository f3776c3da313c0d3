//! Read-only interfaces the tile renderer uses to reach world data
//!
//! The renderer never owns chunks: a [`WorldSource`] hands them out behind an
//! `Arc` and the renderer drops its handle once the chunk has been drawn.
//! Implementations must tolerate concurrent reads from independent tile
//! workers; any caching or locking is theirs to provide.

use std::sync::Arc;

use crate::world::core::{BiomeId, BlockId, ChunkPos, LocalBlockPos};

/// One chunk of voxel data
pub trait ChunkView: Send + Sync {
    /// Position of this chunk in chunk coordinates
    fn pos(&self) -> ChunkPos;

    fn block_id(&self, pos: LocalBlockPos) -> BlockId;

    fn block_data(&self, pos: LocalBlockPos) -> u16;

    /// Biome of the column containing `pos`
    fn biome_at(&self, _pos: LocalBlockPos) -> BiomeId {
        BiomeId::DEFAULT
    }
}

/// Chunk lookup by coordinate
pub trait WorldSource: Send + Sync {
    type Chunk: ChunkView;

    /// Chunk at `pos`, or `None` if the world has nothing there
    fn chunk_for(&self, pos: ChunkPos) -> Option<Arc<Self::Chunk>>;
}

impl<W: WorldSource + ?Sized> WorldSource for Arc<W> {
    type Chunk = W::Chunk;

    fn chunk_for(&self, pos: ChunkPos) -> Option<Arc<Self::Chunk>> {
        (**self).chunk_for(pos)
    }
}
