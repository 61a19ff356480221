//! Nearest-neighbor resampling
//!
//! Every destination pixel takes the value of the source pixel whose centre is
//! closest to the destination pixel's centre: `src = floor((dst + 0.5) * in / out)`.
//! No interpolation happens, so hard pixel edges survive any scale.

use image::RgbaImage;

/// Map a destination coordinate to its nearest source coordinate.
///
/// Integer form of `floor((dst + 0.5) * src_len / dst_len)`, clamped to the
/// last source index.
fn nearest_index(dst: u32, src_len: u32, dst_len: u32) -> u32 {
    let idx = ((2 * dst as u64 + 1) * src_len as u64) / (2 * dst_len as u64);
    (idx as u32).min(src_len.saturating_sub(1))
}

/// Resize an image to exactly `width` x `height` using nearest-neighbor sampling.
///
/// Returns a copy when the size already matches. A zero-sized source or target
/// yields a fully transparent image of the requested size.
pub fn resize_nearest(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let (src_w, src_h) = image.dimensions();
    if (src_w, src_h) == (width, height) {
        return image.clone();
    }
    if src_w == 0 || src_h == 0 || width == 0 || height == 0 {
        return RgbaImage::new(width, height);
    }

    let columns: Vec<u32> = (0..width).map(|x| nearest_index(x, src_w, width)).collect();

    let mut out = RgbaImage::new(width, height);
    for y in 0..height {
        let sy = nearest_index(y, src_h, height);
        for (x, &sx) in columns.iter().enumerate() {
            out.put_pixel(x as u32, y, *image.get_pixel(sx, sy));
        }
    }
    out
}

/// Scale image by integer factor using nearest-neighbor sampling.
///
/// Used for the enlarged export variant of a finished totem. A factor of 0 or
/// 1 returns the image unchanged.
pub fn scale_image(image: RgbaImage, factor: u32) -> RgbaImage {
    if factor <= 1 {
        return image;
    }
    let (w, h) = image.dimensions();
    resize_nearest(&image, w * factor, h * factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn checker_2x2() -> RgbaImage {
        let mut image = RgbaImage::new(2, 2);
        image.put_pixel(0, 0, Rgba([255, 0, 0, 255])); // Red
        image.put_pixel(1, 0, Rgba([0, 255, 0, 255])); // Green
        image.put_pixel(0, 1, Rgba([0, 0, 255, 255])); // Blue
        image.put_pixel(1, 1, Rgba([255, 255, 0, 255])); // Yellow
        image
    }

    #[test]
    fn test_nearest_index_upscale_by_two() {
        let mapped: Vec<u32> = (0..16).map(|d| nearest_index(d, 8, 16)).collect();
        assert_eq!(mapped, vec![0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7]);
    }

    #[test]
    fn test_nearest_index_downscale_samples_centres() {
        // 32 -> 16 picks the odd column of each pair, as centre sampling does
        let mapped: Vec<u32> = (0..4).map(|d| nearest_index(d, 32, 16)).collect();
        assert_eq!(mapped, vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_nearest_index_non_integer_ratio() {
        let mapped: Vec<u32> = (0..5).map(|d| nearest_index(d, 3, 5)).collect();
        assert_eq!(mapped, vec![0, 0, 1, 2, 2]);
    }

    #[test]
    fn test_resize_same_size_is_copy() {
        let image = checker_2x2();
        assert_eq!(resize_nearest(&image, 2, 2), image);
    }

    #[test]
    fn test_resize_head_sized_block() {
        let mut image = RgbaImage::new(8, 8);
        image.put_pixel(7, 0, Rgba([10, 20, 30, 255]));

        let resized = resize_nearest(&image, 16, 16);
        assert_eq!(resized.dimensions(), (16, 16));
        assert_eq!(*resized.get_pixel(14, 0), Rgba([10, 20, 30, 255]));
        assert_eq!(*resized.get_pixel(15, 1), Rgba([10, 20, 30, 255]));
        assert_eq!(*resized.get_pixel(13, 0), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_resize_empty_source() {
        let image = RgbaImage::new(0, 0);
        let resized = resize_nearest(&image, 4, 4);
        assert_eq!(resized.dimensions(), (4, 4));
        assert!(resized.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_scale_image_factor_one_returns_original() {
        let image = checker_2x2();
        let scaled = scale_image(image.clone(), 1);
        assert_eq!(scaled, image);
    }

    #[test]
    fn test_scale_image_factor_two() {
        let scaled = scale_image(checker_2x2(), 2);

        assert_eq!(scaled.dimensions(), (4, 4));
        // Each original pixel becomes a 2x2 block
        assert_eq!(*scaled.get_pixel(1, 1), Rgba([255, 0, 0, 255]));
        assert_eq!(*scaled.get_pixel(2, 0), Rgba([0, 255, 0, 255]));
        assert_eq!(*scaled.get_pixel(1, 3), Rgba([0, 0, 255, 255]));
        assert_eq!(*scaled.get_pixel(3, 3), Rgba([255, 255, 0, 255]));
    }

    #[test]
    fn test_scale_image_export_size() {
        let mut image = RgbaImage::new(32, 32);
        image.put_pixel(31, 31, Rgba([1, 2, 3, 255]));

        let scaled = scale_image(image, 8);
        assert_eq!(scaled.dimensions(), (256, 256));
        assert_eq!(*scaled.get_pixel(248, 248), Rgba([1, 2, 3, 255]));
        assert_eq!(*scaled.get_pixel(255, 255), Rgba([1, 2, 3, 255]));
        assert_eq!(*scaled.get_pixel(247, 255), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_scale_preserves_transparency() {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        image.put_pixel(1, 0, Rgba([9, 9, 9, 0]));

        let scaled = scale_image(image, 2);
        assert_eq!(*scaled.get_pixel(1, 1), Rgba([255, 0, 0, 255]));
        assert_eq!(*scaled.get_pixel(3, 1), Rgba([9, 9, 9, 0]));
    }
}
