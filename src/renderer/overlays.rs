//! Overlay implementations
//!
//! Overlays only draw their delta; masking against the block sprite is
//! done by the sample builder.

use image::{Rgba, RgbaImage};
use rustc_hash::FxHashSet;

use super::interfaces::Overlay;
use crate::world::core::{BlockId, BlockPos};

/// Draws nothing. The default hardcode overlay.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopOverlay;

impl Overlay for NoopOverlay {
    fn draw(&self, _: &RgbaImage, _: &mut RgbaImage, _: BlockPos, _: BlockId, _: u16) {}

    fn name(&self) -> &str {
        "noop"
    }
}

/// Colors blocks by their height: blue at the floor, green around sea
/// level, red at the top
#[derive(Debug, Clone, Copy)]
pub struct HeightOverlay {
    pub sea_level: i32,
    pub max_height: i32,
    pub alpha: u8,
}

impl Default for HeightOverlay {
    fn default() -> Self {
        Self {
            sea_level: 64,
            max_height: 256,
            alpha: 0x55,
        }
    }
}

impl HeightOverlay {
    pub fn color_at(&self, y: i32) -> Rgba<u8> {
        let lerp = |from: u8, to: u8, t: f32| (from as f32 + (to as f32 - from as f32) * t) as u8;
        let (r, g, b) = if y < self.sea_level {
            let t = (y.max(0) as f32 / self.sea_level.max(1) as f32).clamp(0.0, 1.0);
            (0, lerp(0, 255, t), lerp(255, 0, t))
        } else {
            let span = (self.max_height - self.sea_level).max(1) as f32;
            let t = ((y - self.sea_level) as f32 / span).clamp(0.0, 1.0);
            (lerp(0, 255, t), lerp(255, 0, t), 0)
        };
        Rgba([r, g, b, self.alpha])
    }
}

impl Overlay for HeightOverlay {
    fn draw(&self, _sprite: &RgbaImage, dest: &mut RgbaImage, pos: BlockPos, _: BlockId, _: u16) {
        let color = self.color_at(pos.y);
        for pixel in dest.pixels_mut() {
            *pixel = color;
        }
    }

    fn name(&self) -> &str {
        "height"
    }
}

/// Flat tint over every block
#[derive(Debug, Clone, Copy)]
pub struct TintOverlay {
    pub color: [u8; 4],
    pub base: bool,
}

impl Overlay for TintOverlay {
    fn draw(&self, _sprite: &RgbaImage, dest: &mut RgbaImage, _: BlockPos, _: BlockId, _: u16) {
        for pixel in dest.pixels_mut() {
            *pixel = Rgba(self.color);
        }
    }

    fn is_base_replacing(&self) -> bool {
        self.base
    }

    fn name(&self) -> &str {
        "tint"
    }
}

/// Paints a solid color over selected block ids
#[derive(Debug, Clone)]
pub struct HighlightOverlay {
    pub blocks: FxHashSet<BlockId>,
    pub color: [u8; 4],
}

impl HighlightOverlay {
    pub fn new(blocks: impl IntoIterator<Item = BlockId>, color: [u8; 4]) -> Self {
        Self {
            blocks: blocks.into_iter().collect(),
            color,
        }
    }
}

impl Overlay for HighlightOverlay {
    fn draw(&self, _sprite: &RgbaImage, dest: &mut RgbaImage, _: BlockPos, id: BlockId, _: u16) {
        if !self.blocks.contains(&id) {
            return;
        }
        for pixel in dest.pixels_mut() {
            *pixel = Rgba(self.color);
        }
    }

    fn name(&self) -> &str {
        "highlight"
    }
}
