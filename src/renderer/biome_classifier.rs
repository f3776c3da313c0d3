//! Biome classification from per-column chunk biome data

use super::interfaces::BiomeClassifier;
use crate::world::core::{biome_tint_kind, BiomeId, BlockId, BlockPos};
use crate::world::interfaces::ChunkView;

/// Looks the biome up in the chunk that owns the block
#[derive(Debug, Default, Clone, Copy)]
pub struct ChunkBiomeClassifier;

impl BiomeClassifier for ChunkBiomeClassifier {
    fn is_biome_dependent(&self, id: BlockId, data: u16) -> bool {
        biome_tint_kind(id, data).is_some()
    }

    fn biome_of(&self, pos: BlockPos, chunk: &dyn ChunkView) -> BiomeId {
        chunk.biome_at(pos.to_local())
    }
}
