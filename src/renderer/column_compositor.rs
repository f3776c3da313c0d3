//! Column Compositor
//!
//! Paints a scanned column back to front: the deepest sample first, the
//! shallowest last, so transparent blocks near the surface tint whatever
//! lies beneath them.

use image::RgbaImage;

use super::image_ops::{alpha_blit, alpha_blit_masked};
use super::interfaces::Overlay;
use super::tile_renderer_data::Column;
use std::sync::Arc;

/// Composite `column` onto the tile and overlay canvases at (image_x, image_y).
/// `overlays` and `overlay_tiles` are index-aligned with each sample's deltas.
pub fn composite_column(
    column: Column,
    overlays: &[Arc<dyn Overlay>],
    tile: &mut RgbaImage,
    overlay_tiles: &mut [RgbaImage],
    image_x: u32,
    image_y: u32,
) {
    for sample in column.samples.into_iter().rev() {
        alpha_blit(tile, &sample.sprite, image_x, image_y);

        for ((overlay, overlay_tile), delta) in overlays
            .iter()
            .zip(overlay_tiles.iter_mut())
            .zip(&sample.overlays)
        {
            // a flat tint over transparent water needs the water texture under it
            if sample.has_full_water && overlay.is_base_replacing() {
                alpha_blit(overlay_tile, &sample.sprite, image_x, image_y);
            }
            alpha_blit_masked(overlay_tile, delta, image_x, image_y, &sample.sprite);
        }
    }
}
