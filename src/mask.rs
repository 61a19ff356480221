//! Mask cells: punching transparent pixels into a region image.
//!
//! Cells are expressed in the region's local coordinates. Anything that falls
//! outside the image is ignored rather than reported.

use image::RgbaImage;

use crate::regions::MaskCell;

/// Set alpha to 0 for every in-bounds pixel covered by `cells`.
///
/// Color channels are left as they are. Cells are applied in order; overlapping
/// cells are harmless.
pub fn apply_mask(image: &mut RgbaImage, cells: &[MaskCell]) {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    for cell in cells {
        let (x1, y1, x2, y2) = match *cell {
            MaskCell::Point(x, y) => (x, y, x, y),
            MaskCell::Rect(x1, y1, x2, y2) => (x1, y1, x2, y2),
        };
        // Clamp to the image; an inverted or fully outside cell covers nothing
        if x1 > x2 || y1 > y2 || x1 >= width || y1 >= height {
            continue;
        }
        let x2 = x2.min(width - 1);
        let y2 = y2.min(height - 1);

        for y in y1..=y2 {
            for x in x1..=x2 {
                image.get_pixel_mut(x, y)[3] = 0;
            }
        }
    }
}
