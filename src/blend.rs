//! Porter-Duff "source over" compositing

use image::{Rgba, RgbaImage};

/// Composite `src` over `dst` (same size) in place.
///
/// Pixels are matched by position; where the images differ in size only the
/// overlapping area is composited. Fully transparent source pixels leave the
/// destination unchanged.
pub fn composite_over(dst: &mut RgbaImage, src: &RgbaImage) {
    let width = dst.width().min(src.width());
    let height = dst.height().min(src.height());

    for y in 0..height {
        for x in 0..width {
            let s = src.get_pixel(x, y);
            if s[3] == 0 {
                continue;
            }
            let d = dst.get_pixel(x, y);
            let blended = blend_pixels(s, d);
            dst.put_pixel(x, y, blended);
        }
    }
}

/// Blend source pixel over destination using the source's own alpha.
pub fn blend_pixels(src: &Rgba<u8>, dst: &Rgba<u8>) -> Rgba<u8> {
    let src_alpha = src[3] as f32 / 255.0;
    let dst_alpha = dst[3] as f32 / 255.0;

    // out_alpha = src_alpha + dst_alpha * (1 - src_alpha)
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);

    if out_alpha == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    // out_color = (src_color * src_alpha + dst_color * dst_alpha * (1 - src_alpha)) / out_alpha
    let composite = |s: u8, d: u8| -> u8 {
        let s = s as f32 / 255.0;
        let d = d as f32 / 255.0;
        let result = (s * src_alpha + d * dst_alpha * (1.0 - src_alpha)) / out_alpha;
        (result.clamp(0.0, 1.0) * 255.0).round() as u8
    };

    Rgba([
        composite(src[0], dst[0]),
        composite(src[1], dst[1]),
        composite(src[2], dst[2]),
        (out_alpha * 255.0).round() as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_source_replaces() {
        let out = blend_pixels(&Rgba([0, 0, 255, 255]), &Rgba([255, 0, 0, 255]));
        assert_eq!(out, Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn test_transparent_source_keeps_destination() {
        let out = blend_pixels(&Rgba([0, 0, 255, 0]), &Rgba([255, 0, 0, 255]));
        assert_eq!(out, Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_half_alpha_over_opaque() {
        let out = blend_pixels(&Rgba([255, 255, 255, 128]), &Rgba([0, 0, 0, 255]));
        assert_eq!(out[3], 255);
        assert!(out[0] >= 127 && out[0] <= 129, "got {}", out[0]);
    }

    #[test]
    fn test_source_over_transparent_destination() {
        let out = blend_pixels(&Rgba([10, 20, 30, 100]), &Rgba([0, 0, 0, 0]));
        assert_eq!(out, Rgba([10, 20, 30, 100]));
    }

    #[test]
    fn test_both_transparent() {
        let out = blend_pixels(&Rgba([0, 0, 0, 0]), &Rgba([0, 0, 0, 0]));
        assert_eq!(out, Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_composite_over_skips_transparent_pixels() {
        let mut dst = RgbaImage::from_pixel(2, 1, Rgba([255, 0, 0, 255]));
        let mut src = RgbaImage::new(2, 1);
        src.put_pixel(1, 0, Rgba([0, 255, 0, 255]));

        composite_over(&mut dst, &src);

        assert_eq!(*dst.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
        assert_eq!(*dst.get_pixel(1, 0), Rgba([0, 255, 0, 255]));
    }

    #[test]
    fn test_composite_over_mismatched_sizes() {
        let mut dst = RgbaImage::new(2, 2);
        let src = RgbaImage::from_pixel(4, 1, Rgba([1, 2, 3, 255]));

        composite_over(&mut dst, &src);

        assert_eq!(*dst.get_pixel(1, 0), Rgba([1, 2, 3, 255]));
        assert_eq!(*dst.get_pixel(1, 1), Rgba([0, 0, 0, 0]));
    }
}
