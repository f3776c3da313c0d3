//! Render mode implementations

use rustc_hash::FxHashSet;

use super::interfaces::RenderMode;
use crate::world::core::{BlockId, BlockPos};

/// Renders every block
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultRenderMode;

impl RenderMode for DefaultRenderMode {
    fn is_hidden(&self, _: BlockPos, _: BlockId, _: u16) -> bool {
        false
    }
}

/// Hides a fixed set of block ids, optionally only above a height
#[derive(Debug, Clone, Default)]
pub struct HideBlocksRenderMode {
    pub hidden: FxHashSet<BlockId>,
    pub min_y: Option<i32>,
}

impl HideBlocksRenderMode {
    pub fn new(hidden: impl IntoIterator<Item = BlockId>) -> Self {
        Self {
            hidden: hidden.into_iter().collect(),
            min_y: None,
        }
    }
}

impl RenderMode for HideBlocksRenderMode {
    fn is_hidden(&self, pos: BlockPos, id: BlockId, _: u16) -> bool {
        self.hidden.contains(&id) && self.min_y.map_or(true, |min_y| pos.y >= min_y)
    }
}
