//! The 32x32 totem canvas and stencil pasting

use image::RgbaImage;

use crate::compose::RegionImage;
use crate::regions::{Point, TOTEM_SIZE};

/// Accumulator for the finished totem.
///
/// Always [`TOTEM_SIZE`] square and fully transparent when created.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self { image: RgbaImage::new(TOTEM_SIZE, TOTEM_SIZE) }
    }

    /// Stencil-paste `image` with its top-left corner at `dest`.
    ///
    /// Pixels with non-zero alpha replace the canvas pixel outright (no
    /// blending). Pixels with zero alpha leave the canvas untouched. Anything
    /// that would land off the canvas is dropped.
    pub fn paste(&mut self, image: &RgbaImage, dest: Point) {
        for (x, y, pixel) in image.enumerate_pixels() {
            if pixel[3] == 0 {
                continue;
            }
            let cx = dest.x.saturating_add(x);
            let cy = dest.y.saturating_add(y);
            if cx >= TOTEM_SIZE || cy >= TOTEM_SIZE {
                continue;
            }
            self.image.put_pixel(cx, cy, *pixel);
        }
    }

    /// Paste a composed region at its own destination.
    pub fn paste_region(&mut self, region: &RegionImage) {
        self.paste(&region.image, region.dest);
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}
