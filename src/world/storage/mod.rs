//! Resident chunk storage

mod memory_chunk;
mod memory_world;

pub use memory_chunk::MemoryChunk;
pub use memory_world::MemoryWorld;
