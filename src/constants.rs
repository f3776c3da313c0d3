//! Shared constants for chunk geometry, water handling and atlas defaults.

pub mod core {
    /// Columns per chunk edge
    pub const CHUNK_WIDTH: i32 = 16;

    /// Vertical sections per chunk
    pub const CHUNK_SECTIONS: i32 = 16;

    /// Blocks per chunk column
    pub const CHUNK_HEIGHT: i32 = CHUNK_WIDTH * CHUNK_SECTIONS;

    /// Columns per chunk
    pub const COLUMNS_PER_CHUNK: usize = (CHUNK_WIDTH * CHUNK_WIDTH) as usize;

    /// Voxels per chunk
    pub const VOXELS_PER_CHUNK: usize = COLUMNS_PER_CHUNK * CHUNK_HEIGHT as usize;
}

pub mod water {
    /// Data flag marking the synthetic "looking into deep water" block.
    /// Sits above the 4-bit fluid level nibble.
    pub const OPAQUE_WATER: u16 = 0x2000;

    /// Mask for the fluid level stored in the data value
    pub const LEVEL_MASK: u16 = 0x0f;

    /// Upper bound for stacked water layers before the column is compacted
    pub const MAX_WATER_PREBLIT: u32 = 64;
}

pub mod atlas {
    /// Default sprite edge length in pixels
    pub const DEFAULT_SPRITE_SIZE: u32 = 12;

    /// Largest accepted sprite edge length
    pub const MAX_SPRITE_SIZE: u32 = 256;

    /// Largest accepted chunks-per-tile edge
    pub const MAX_TILE_WIDTH: u32 = 64;

    /// Largest accepted tile edge in pixels (sprite size * 16 * tile width)
    pub const MAX_TILE_PIXELS: u32 = 8192;

    /// Default alpha of the built-in water color
    pub const DEFAULT_WATER_ALPHA: u8 = 0x60;
}
