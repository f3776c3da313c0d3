//! RGBA image operations used by the sample builder and compositor
//!
//! All blits clip against the destination; sources may hang off any edge.

use image::{Rgba, RgbaImage};

/// Source-over blend of one pixel onto another
#[inline]
pub fn blend_pixel(dest: &mut Rgba<u8>, src: Rgba<u8>) {
    let sa = src[3] as u32;
    if sa == 0 {
        return;
    }
    let da = dest[3] as u32;
    if sa == 255 || da == 0 {
        *dest = src;
        return;
    }

    let inv = 255 - sa;
    let dest_weight = da * inv / 255;
    let out_a = sa + dest_weight;
    for c in 0..3 {
        let value = (src[c] as u32 * sa + dest[c] as u32 * dest_weight) / out_a;
        dest[c] = value.min(255) as u8;
    }
    dest[3] = out_a.min(255) as u8;
}

fn blit_with<F>(dest: &mut RgbaImage, src: &RgbaImage, x: u32, y: u32, mut pixel_op: F)
where
    F: FnMut(&mut Rgba<u8>, u32, u32, Rgba<u8>),
{
    let width = src.width().min(dest.width().saturating_sub(x));
    let height = src.height().min(dest.height().saturating_sub(y));
    for sy in 0..height {
        for sx in 0..width {
            let src_pixel = *src.get_pixel(sx, sy);
            pixel_op(dest.get_pixel_mut(x + sx, y + sy), sx, sy, src_pixel);
        }
    }
}

/// Alpha-blend `src` onto `dest` with its top-left corner at (x, y)
pub fn alpha_blit(dest: &mut RgbaImage, src: &RgbaImage, x: u32, y: u32) {
    blit_with(dest, src, x, y, |d, _, _, s| blend_pixel(d, s));
}

/// Alpha-blend `src` onto `dest`, never letting a source pixel's alpha exceed
/// the alpha of the same pixel in `mask`
pub fn alpha_blit_masked(dest: &mut RgbaImage, src: &RgbaImage, x: u32, y: u32, mask: &RgbaImage) {
    blit_with(dest, src, x, y, |d, sx, sy, mut s| {
        let mask_alpha = mask.get_pixel_checked(sx, sy).map_or(0, |m| m[3]);
        s[3] = s[3].min(mask_alpha);
        blend_pixel(d, s);
    });
}

/// Clamp every pixel's alpha to the mask's alpha. Pixels where the mask is
/// fully transparent are cleared entirely.
pub fn apply_mask(image: &mut RgbaImage, mask: &RgbaImage) {
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let mask_alpha = mask.get_pixel_checked(x, y).map_or(0, |m| m[3]);
        if mask_alpha == 0 {
            *pixel = Rgba([0, 0, 0, 0]);
        } else {
            pixel[3] = pixel[3].min(mask_alpha);
        }
    }
}

/// Fully transparent image of the same size
pub fn empty_copy(image: &RgbaImage) -> RgbaImage {
    RgbaImage::new(image.width(), image.height())
}

/// True if any pixel is not fully opaque
pub fn has_transparency(image: &RgbaImage) -> bool {
    image.pixels().any(|p| p[3] < 255)
}

/// True if every pixel is fully transparent
pub fn is_blank(image: &RgbaImage) -> bool {
    image.pixels().all(|p| p[3] == 0)
}

/// Multiply the color channels by `tint`, leaving alpha alone
pub fn tint_rgb(image: &mut RgbaImage, tint: [u8; 3]) {
    for pixel in image.pixels_mut() {
        for c in 0..3 {
            pixel[c] = ((pixel[c] as u32 * tint[c] as u32) / 255) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_source_replaces() {
        let mut dest = Rgba([10, 20, 30, 255]);
        blend_pixel(&mut dest, Rgba([200, 100, 50, 255]));
        assert_eq!(dest, Rgba([200, 100, 50, 255]));
    }

    #[test]
    fn test_transparent_source_is_noop() {
        let mut dest = Rgba([10, 20, 30, 255]);
        blend_pixel(&mut dest, Rgba([200, 100, 50, 0]));
        assert_eq!(dest, Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_half_alpha_over_opaque() {
        let mut dest = Rgba([0, 0, 0, 255]);
        blend_pixel(&mut dest, Rgba([255, 255, 255, 128]));
        assert_eq!(dest[3], 255);
        assert!(dest[0] >= 127 && dest[0] <= 129);
    }

    #[test]
    fn test_blit_clips_to_destination() {
        let mut dest = RgbaImage::new(4, 4);
        let src = RgbaImage::from_pixel(3, 3, Rgba([1, 2, 3, 255]));
        alpha_blit(&mut dest, &src, 2, 2);
        assert_eq!(*dest.get_pixel(3, 3), Rgba([1, 2, 3, 255]));
        assert_eq!(*dest.get_pixel(1, 1), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_apply_mask_clears_outside_sprite() {
        let mut mask = RgbaImage::new(2, 1);
        mask.put_pixel(0, 0, Rgba([0, 0, 0, 100]));
        let mut image = RgbaImage::from_pixel(2, 1, Rgba([9, 9, 9, 200]));
        apply_mask(&mut image, &mask);
        assert_eq!(*image.get_pixel(0, 0), Rgba([9, 9, 9, 100]));
        assert_eq!(*image.get_pixel(1, 0), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_masked_blit_respects_mask() {
        let mut dest = RgbaImage::new(2, 1);
        let src = RgbaImage::from_pixel(2, 1, Rgba([50, 60, 70, 255]));
        let mut mask = RgbaImage::new(2, 1);
        mask.put_pixel(1, 0, Rgba([0, 0, 0, 255]));
        alpha_blit_masked(&mut dest, &src, 0, 0, &mask);
        assert_eq!(*dest.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
        assert_eq!(*dest.get_pixel(1, 0), Rgba([50, 60, 70, 255]));
    }

    #[test]
    fn test_tint_rgb() {
        let mut image = RgbaImage::from_pixel(1, 1, Rgba([255, 128, 0, 77]));
        tint_rgb(&mut image, [128, 255, 255]);
        assert_eq!(*image.get_pixel(0, 0), Rgba([128, 128, 0, 77]));
    }
}
