//! Column Scanner
//!
//! Walks one voxel column from the top of the world down and collects the
//! samples a top-down viewer can see: everything down to and including the
//! first opaque block, minus air and hidden blocks, with full-water runs
//! compacted according to the renderer's [`WaterMode`].
//!
//! In preblit mode a run of water samples is held back in `pending` until a
//! non-water block decides its fate. If the run grows past the atlas'
//! compaction depth, only its topmost sample survives, as the opaque deep
//! water sample, and the scan ends there.

use super::interfaces::BlockHandler;
use super::sample_builder::{build_sample, into_deep_water};
use super::tile_renderer_data::{BlockSample, Column, TileRenderer, WaterMode};
use crate::constants::core::CHUNK_HEIGHT;
use crate::world::core::{is_full_water, BlockId, BlockPos, LocalBlockPos};
use crate::world::interfaces::ChunkView;

/// Per-column scan state
#[derive(Default)]
struct ColumnScan {
    committed: Vec<BlockSample>,

    /// Water samples of the current run (preblit mode only)
    pending: Vec<BlockSample>,

    /// Inside a full-water run not yet broken by air (legacy mode)
    in_water: bool,

    /// Full water was seen somewhere above (legacy mode)
    has_full_water: bool,

    /// Consecutive full-water voxels (preblit mode)
    water_depth: u32,
}

impl ColumnScan {
    fn flush_pending(&mut self) {
        self.committed.append(&mut self.pending);
    }

    fn finish(mut self) -> Column {
        self.flush_pending();
        Column {
            samples: self.committed,
        }
    }
}

/// Outcome of looking at one voxel
enum Step {
    Continue,
    Stop,
}

/// Scan column (x, z) of `chunk`. `handler` sees every voxel visited, from
/// the top of the world down to the voxel where the scan stops.
pub fn scan_column(
    renderer: &TileRenderer,
    chunk: &dyn ChunkView,
    x: i32,
    z: i32,
    handler: &mut dyn BlockHandler,
) -> Column {
    let chunk_pos = chunk.pos();
    let mut scan = ColumnScan::default();

    // TODO start from the chunk's heightmap once world sources expose one
    let mut y = CHUNK_HEIGHT - 1;
    while y >= 0 {
        let local = LocalBlockPos::new(x, z, y);
        let id = chunk.block_id(local);
        if !id.is_air() {
            break;
        }
        handler.on_block(local.to_global(chunk_pos), id, chunk.block_data(local));
        y -= 1;
    }

    while y >= 0 {
        let local = LocalBlockPos::new(x, z, y);
        let pos = local.to_global(chunk_pos);
        let id = chunk.block_id(local);
        let data = chunk.block_data(local);
        handler.on_block(pos, id, data);
        y -= 1;

        if id.is_air() {
            scan.in_water = false;
            continue;
        }
        if renderer.render_mode.is_hidden(pos, id, data) {
            continue;
        }

        let step = match renderer.water_mode {
            WaterMode::Legacy => scan_legacy(renderer, chunk, &mut scan, pos, id, data),
            WaterMode::Preblit => scan_preblit(renderer, chunk, &mut scan, pos, id, data),
        };
        if let Step::Stop = step {
            break;
        }
    }

    scan.finish()
}

fn scan_legacy(
    renderer: &TileRenderer,
    chunk: &dyn ChunkView,
    scan: &mut ColumnScan,
    pos: BlockPos,
    id: BlockId,
    data: u16,
) -> Step {
    // only air ends a water run; other blocks in between do not
    if is_full_water(id, data) {
        scan.has_full_water = true;
        if scan.in_water {
            return Step::Continue;
        }
        scan.in_water = true;
    }

    scan.committed
        .push(build_sample(renderer, chunk, pos, id, data, scan.has_full_water));
    occlusion_step(renderer, id, data)
}

fn scan_preblit(
    renderer: &TileRenderer,
    chunk: &dyn ChunkView,
    scan: &mut ColumnScan,
    pos: BlockPos,
    id: BlockId,
    data: u16,
) -> Step {
    if !is_full_water(id, data) {
        scan.water_depth = 0;
        scan.flush_pending();
        scan.committed
            .push(build_sample(renderer, chunk, pos, id, data, scan.has_full_water));
        return occlusion_step(renderer, id, data);
    }

    scan.water_depth += 1;
    if scan.water_depth > renderer.atlas.max_water_compaction_depth() {
        let top = std::mem::take(&mut scan.pending)
            .into_iter()
            .next()
            .unwrap_or_else(|| build_sample(renderer, chunk, pos, id, data, scan.has_full_water));
        scan.committed.push(into_deep_water(renderer, top));
        return Step::Stop;
    }

    scan.pending
        .push(build_sample(renderer, chunk, pos, id, data, scan.has_full_water));
    occlusion_step(renderer, id, data)
}

fn occlusion_step(renderer: &TileRenderer, id: BlockId, data: u16) -> Step {
    if renderer.atlas.is_transparent(id, data) {
        Step::Continue
    } else {
        Step::Stop
    }
}
