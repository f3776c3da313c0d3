//! Tile render configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! [render]
//! tile_width = 2
//! water_mode = "preblit"
//! hidden_blocks = [31, 175]
//!
//! [[overlays]]
//! kind = "height"
//!
//! [[overlays]]
//! kind = "tint"
//! color = [0, 0, 0, 96]
//! base = true
//!
//! [atlas]
//! sprite_size = 12
//!
//! [[atlas.blocks]]
//! id = 1
//! color = [125, 125, 125, 255]
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constants::atlas::{
    DEFAULT_SPRITE_SIZE, MAX_SPRITE_SIZE, MAX_TILE_PIXELS, MAX_TILE_WIDTH,
};
use crate::constants::core::CHUNK_WIDTH;
use crate::error::{ErrorContext, TileError, TileResult};
use crate::renderer::{
    build_from_palette, create_tile_renderer, default_palette, with_overlays, BlockAtlas,
    HeightOverlay, HideBlocksRenderMode, HighlightOverlay, Overlay, PaletteEntry, SpriteAtlas,
    TileRenderer, TintOverlay, WaterMode,
};
use crate::world::core::BlockId;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TileRenderConfig {
    pub render: RenderSection,

    /// Drawn directly onto every block sprite
    pub hardcode: Option<OverlayConfig>,

    /// Optional overlays, one output canvas each
    pub overlays: Vec<OverlayConfig>,

    pub atlas: AtlasSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSection {
    pub tile_width: u32,
    pub water_mode: WaterMode,

    /// Replaces the water compaction depth derived from the water sprite
    pub max_water_depth: Option<u32>,

    pub hidden_blocks: Vec<u16>,

    /// Hidden blocks are only hidden at or above this height
    pub hidden_min_y: Option<i32>,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            tile_width: 1,
            water_mode: WaterMode::default(),
            max_water_depth: None,
            hidden_blocks: Vec::new(),
            hidden_min_y: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverlayConfig {
    /// One of `height`, `tint`, `highlight`
    pub kind: String,
    #[serde(default)]
    pub color: Option<[u8; 4]>,
    #[serde(default)]
    pub base: bool,
    #[serde(default)]
    pub blocks: Vec<u16>,
    #[serde(default)]
    pub sea_level: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AtlasSection {
    pub sprite_size: u32,

    /// Start from the built-in palette before applying `blocks`
    pub use_default_palette: bool,

    /// Alpha of both water ids
    pub water_alpha: Option<u8>,

    pub blocks: Vec<BlockColorConfig>,
}

impl Default for AtlasSection {
    fn default() -> Self {
        Self {
            sprite_size: DEFAULT_SPRITE_SIZE,
            use_default_palette: true,
            water_alpha: None,
            blocks: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockColorConfig {
    pub id: u16,
    #[serde(default)]
    pub data: u16,
    pub color: [u8; 4],
}

impl TileRenderConfig {
    pub fn from_toml_str(source: &str) -> TileResult<Self> {
        let config: TileRenderConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> TileResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).with_path(path)?;
        let config = Self::from_toml_str(&source)?;
        log::info!(
            "[TileRenderConfig::load] Loaded {}: tile_width={}, water_mode={:?}, {} overlays",
            path.display(),
            config.render.tile_width,
            config.render.water_mode,
            config.overlays.len()
        );
        Ok(config)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> TileResult<()> {
        let tile_width = self.render.tile_width;
        if tile_width == 0 || tile_width > MAX_TILE_WIDTH {
            return Err(TileError::invalid_config(
                "render.tile_width",
                tile_width,
                format!("must be between 1 and {}", MAX_TILE_WIDTH),
            ));
        }

        let sprite_size = self.atlas.sprite_size;
        if sprite_size == 0 || sprite_size > MAX_SPRITE_SIZE {
            return Err(TileError::invalid_config(
                "atlas.sprite_size",
                sprite_size,
                format!("must be between 1 and {}", MAX_SPRITE_SIZE),
            ));
        }
        check_tile_pixels(sprite_size, tile_width)?;

        for overlay in self.hardcode.iter().chain(&self.overlays) {
            build_overlay(overlay)?;
        }
        Ok(())
    }

    /// Palette after defaults, config entries and the water alpha override
    pub fn palette(&self) -> Vec<PaletteEntry> {
        let mut palette = if self.atlas.use_default_palette {
            default_palette()
        } else {
            Vec::new()
        };

        for block in &self.atlas.blocks {
            let entry = PaletteEntry {
                id: BlockId(block.id),
                data: block.data,
                color: block.color,
            };
            match palette.iter_mut().find(|e| e.id == entry.id && e.data == entry.data) {
                Some(existing) => *existing = entry,
                None => palette.push(entry),
            }
        }

        if let Some(alpha) = self.atlas.water_alpha {
            for entry in palette.iter_mut().filter(|e| e.id.is_water()) {
                entry.color[3] = alpha;
            }
        }
        palette
    }

    pub fn build_atlas(&self) -> BlockAtlas {
        build_from_palette(self.atlas.sprite_size, &self.palette(), self.render.max_water_depth)
    }

    /// Renderer using the atlas this config describes
    pub fn build_renderer(&self) -> TileResult<TileRenderer> {
        self.build_renderer_with_atlas(Arc::new(self.build_atlas()))
    }

    /// Renderer using an externally provided atlas
    pub fn build_renderer_with_atlas(
        &self,
        atlas: Arc<dyn SpriteAtlas>,
    ) -> TileResult<TileRenderer> {
        self.validate()?;
        check_tile_pixels(atlas.sprite_edge_length(), self.render.tile_width)?;

        let overlays = self
            .overlays
            .iter()
            .map(build_overlay)
            .collect::<TileResult<Vec<_>>>()?;
        let renderer =
            create_tile_renderer(atlas, self.render.tile_width, self.render.water_mode);
        let mut renderer = with_overlays(renderer, overlays);
        if !self.render.hidden_blocks.is_empty() {
            let hidden = self.render.hidden_blocks.iter().copied().map(BlockId);
            let mut mode = HideBlocksRenderMode::new(hidden);
            mode.min_y = self.render.hidden_min_y;
            renderer.render_mode = Arc::new(mode);
        }
        if let Some(hardcode) = &self.hardcode {
            renderer.hardcode_overlay = build_overlay(hardcode)?;
        }

        log::debug!("[TileRenderConfig::build_renderer] {:?}", renderer);
        Ok(renderer)
    }
}

/// Keep tile canvases within a sane allocation
fn check_tile_pixels(sprite_size: u32, tile_width: u32) -> TileResult<()> {
    let pixels = u64::from(sprite_size) * CHUNK_WIDTH as u64 * u64::from(tile_width);
    if pixels > u64::from(MAX_TILE_PIXELS) {
        return Err(TileError::invalid_config(
            "render.tile_width",
            tile_width,
            format!(
                "tile would be {}px wide with {}px sprites, limit is {}px",
                pixels, sprite_size, MAX_TILE_PIXELS
            ),
        ));
    }
    Ok(())
}

fn required_color(config: &OverlayConfig) -> TileResult<[u8; 4]> {
    config.color.ok_or_else(|| {
        TileError::invalid_config(
            format!("overlays.{}.color", config.kind),
            "none",
            "a color is required for this overlay kind",
        )
    })
}

/// Instantiate the overlay an entry describes
pub fn build_overlay(config: &OverlayConfig) -> TileResult<Arc<dyn Overlay>> {
    let overlay: Arc<dyn Overlay> = match config.kind.as_str() {
        "height" => {
            let mut overlay = HeightOverlay::default();
            if let Some(sea_level) = config.sea_level {
                overlay.sea_level = sea_level;
            }
            if let Some(color) = config.color {
                overlay.alpha = color[3];
            }
            Arc::new(overlay)
        }
        "tint" => Arc::new(TintOverlay {
            color: required_color(config)?,
            base: config.base,
        }),
        "highlight" => Arc::new(HighlightOverlay::new(
            config.blocks.iter().copied().map(BlockId),
            required_color(config)?,
        )),
        other => return Err(TileError::UnknownOverlay(other.to_string())),
    };
    Ok(overlay)
}
