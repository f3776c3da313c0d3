//! Block-visit handlers

use rustc_hash::FxHashMap;

use super::interfaces::BlockHandler;
use crate::world::core::{BlockId, BlockPos};

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopBlockHandler;

impl BlockHandler for NoopBlockHandler {
    fn on_block(&mut self, _: BlockPos, _: BlockId, _: u16) {}
}

/// Counts visited voxels per block id
#[derive(Debug, Default, Clone)]
pub struct BlockCounter {
    pub counts: FxHashMap<BlockId, u64>,
    pub visited: u64,
}

impl BlockCounter {
    pub fn count(&self, id: BlockId) -> u64 {
        self.counts.get(&id).copied().unwrap_or(0)
    }
}

impl BlockHandler for BlockCounter {
    fn on_block(&mut self, _pos: BlockPos, id: BlockId, _data: u16) {
        *self.counts.entry(id).or_insert(0) += 1;
        self.visited += 1;
    }
}
