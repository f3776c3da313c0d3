//! Tile output

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{ErrorContext, TileResult};

/// Write a tile as PNG, creating parent directories as needed
pub fn save_png(image: &RgbaImage, path: impl AsRef<Path>) -> TileResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent)?;
    }
    image.save_with_format(path, ImageFormat::Png)?;
    log::debug!(
        "[output::save_png] Wrote {}x{} tile to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_save_png_roundtrips_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiles").join("0_0.png");

        let mut tile = RgbaImage::new(8, 8);
        tile.put_pixel(3, 4, Rgba([10, 20, 30, 200]));
        save_png(&tile, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (8, 8));
        assert_eq!(*loaded.get_pixel(3, 4), Rgba([10, 20, 30, 200]));
        assert_eq!(loaded.get_pixel(0, 0)[3], 0);
    }
}
