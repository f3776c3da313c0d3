//! In-memory world source
//!
//! Chunk map behind a read-write lock so independent tile workers can read
//! concurrently while a loader inserts.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::MemoryChunk;
use crate::world::core::ChunkPos;
use crate::world::interfaces::WorldSource;

#[derive(Default)]
pub struct MemoryWorld {
    chunks: RwLock<FxHashMap<ChunkPos, Arc<MemoryChunk>>>,
}

impl MemoryWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a chunk at its own position, replacing any previous one
    pub fn insert(&self, chunk: MemoryChunk) {
        self.chunks.write().insert(chunk.position, Arc::new(chunk));
    }

    pub fn remove(&self, pos: ChunkPos) -> Option<Arc<MemoryChunk>> {
        self.chunks.write().remove(&pos)
    }

    pub fn len(&self) -> usize {
        self.chunks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.read().is_empty()
    }
}

impl WorldSource for MemoryWorld {
    type Chunk = MemoryChunk;

    fn chunk_for(&self, pos: ChunkPos) -> Option<Arc<MemoryChunk>> {
        self.chunks.read().get(&pos).cloned()
    }
}
