use crate::constants::core::CHUNK_WIDTH;

/// Chunk coordinate on the horizontal plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

/// Absolute voxel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockPos {
    pub x: i32,
    pub z: i32,
    pub y: i32,
}

impl BlockPos {
    pub const fn new(x: i32, z: i32, y: i32) -> Self {
        Self { x, z, y }
    }

    pub fn chunk(&self) -> ChunkPos {
        ChunkPos::new(self.x.div_euclid(CHUNK_WIDTH), self.z.div_euclid(CHUNK_WIDTH))
    }

    pub fn to_local(&self) -> LocalBlockPos {
        LocalBlockPos::new(
            self.x.rem_euclid(CHUNK_WIDTH),
            self.z.rem_euclid(CHUNK_WIDTH),
            self.y,
        )
    }
}

/// Voxel coordinate inside a chunk: x and z in 0..16, y in 0..CHUNK_HEIGHT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LocalBlockPos {
    pub x: i32,
    pub z: i32,
    pub y: i32,
}

impl LocalBlockPos {
    pub const fn new(x: i32, z: i32, y: i32) -> Self {
        Self { x, z, y }
    }

    pub fn to_global(&self, chunk: ChunkPos) -> BlockPos {
        BlockPos::new(
            chunk.x * CHUNK_WIDTH + self.x,
            chunk.z * CHUNK_WIDTH + self.z,
            self.y,
        )
    }
}

/// Position of a map tile; each tile covers `tile_width` x `tile_width` chunks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TilePos {
    pub x: i32,
    pub y: i32,
}

impl TilePos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
