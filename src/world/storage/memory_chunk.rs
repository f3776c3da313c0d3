//! In-memory chunk
//!
//! Dense block id, data and biome arrays for one 16x16 column footprint.
//! Used for world sources that keep decoded chunks resident, and for tests.

use crate::constants::core::{CHUNK_HEIGHT, CHUNK_WIDTH, COLUMNS_PER_CHUNK, VOXELS_PER_CHUNK};
use crate::world::core::{BiomeId, BlockId, ChunkPos, LocalBlockPos};
use crate::world::interfaces::ChunkView;

#[derive(Clone, Debug)]
pub struct MemoryChunk {
    pub position: ChunkPos,
    pub blocks: Vec<BlockId>,
    pub data: Vec<u16>,
    pub biomes: Vec<BiomeId>,
}

fn in_bounds(pos: LocalBlockPos) -> bool {
    (0..CHUNK_WIDTH).contains(&pos.x)
        && (0..CHUNK_WIDTH).contains(&pos.z)
        && (0..CHUNK_HEIGHT).contains(&pos.y)
}

fn voxel_index(pos: LocalBlockPos) -> usize {
    ((pos.y * CHUNK_WIDTH + pos.z) * CHUNK_WIDTH + pos.x) as usize
}

fn column_index(x: i32, z: i32) -> usize {
    (z * CHUNK_WIDTH + x) as usize
}

impl MemoryChunk {
    /// All-air chunk in the default biome
    pub fn new(position: ChunkPos) -> Self {
        Self {
            position,
            blocks: vec![BlockId::AIR; VOXELS_PER_CHUNK],
            data: vec![0; VOXELS_PER_CHUNK],
            biomes: vec![BiomeId::DEFAULT; COLUMNS_PER_CHUNK],
        }
    }

    /// Set a block; positions outside the chunk are ignored
    pub fn set_block(&mut self, pos: LocalBlockPos, id: BlockId, data: u16) {
        if in_bounds(pos) {
            let index = voxel_index(pos);
            self.blocks[index] = id;
            self.data[index] = data;
        }
    }

    /// Set every block of one horizontal layer
    pub fn fill_layer(&mut self, y: i32, id: BlockId, data: u16) {
        for z in 0..CHUNK_WIDTH {
            for x in 0..CHUNK_WIDTH {
                self.set_block(LocalBlockPos::new(x, z, y), id, data);
            }
        }
    }

    /// Set blocks `bottom..=top` of one column
    pub fn fill_column(&mut self, x: i32, z: i32, bottom: i32, top: i32, id: BlockId, data: u16) {
        for y in bottom..=top {
            self.set_block(LocalBlockPos::new(x, z, y), id, data);
        }
    }

    pub fn set_biome(&mut self, x: i32, z: i32, biome: BiomeId) {
        if (0..CHUNK_WIDTH).contains(&x) && (0..CHUNK_WIDTH).contains(&z) {
            self.biomes[column_index(x, z)] = biome;
        }
    }
}

impl ChunkView for MemoryChunk {
    fn pos(&self) -> ChunkPos {
        self.position
    }

    fn block_id(&self, pos: LocalBlockPos) -> BlockId {
        if in_bounds(pos) {
            self.blocks[voxel_index(pos)]
        } else {
            BlockId::AIR
        }
    }

    fn block_data(&self, pos: LocalBlockPos) -> u16 {
        if in_bounds(pos) {
            self.data[voxel_index(pos)]
        } else {
            0
        }
    }

    fn biome_at(&self, pos: LocalBlockPos) -> BiomeId {
        if (0..CHUNK_WIDTH).contains(&pos.x) && (0..CHUNK_WIDTH).contains(&pos.z) {
            self.biomes[column_index(pos.x, pos.z)]
        } else {
            BiomeId::DEFAULT
        }
    }
}
