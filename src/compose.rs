//! Region compositing: extract, resample, mask and overlay one body part
//!
//! The result of [`compose_region`] is a ready-to-paste [`RegionImage`]
//! carrying its own destination on the totem canvas.

use image::RgbaImage;

use crate::blend::composite_over;
use crate::mask::apply_mask;
use crate::regions::{Point, Rect, Region, RegionSpec, Resample, HEAD_OVERLAY_RECT};
use crate::resample::resize_nearest;

/// A finished region image tagged with where it goes on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionImage {
    pub region: Region,
    pub image: RgbaImage,
    pub dest: Point,
}

/// Copy `rect` out of `skin`.
///
/// The result is always `rect.width` x `rect.height`. Any part of the rectangle
/// beyond the skin's bounds is filled with fully transparent pixels, so small
/// skins never cause an error.
pub fn extract_region(skin: &RgbaImage, rect: Rect) -> RgbaImage {
    let mut out = RgbaImage::new(rect.width, rect.height);
    let (skin_w, skin_h) = skin.dimensions();

    for y in 0..rect.height {
        let sy = rect.y.saturating_add(y);
        if sy >= skin_h {
            break;
        }
        for x in 0..rect.width {
            let sx = rect.x.saturating_add(x);
            if sx >= skin_w {
                break;
            }
            out.put_pixel(x, y, *skin.get_pixel(sx, sy));
        }
    }
    out
}

/// Extract `rect`, apply the region's resample rule and punch its mask.
fn extract_layer(skin: &RgbaImage, rect: Rect, spec: &RegionSpec) -> RgbaImage {
    let mut image = extract_region(skin, rect);
    if let Resample::Nearest { width, height } = spec.resample {
        image = resize_nearest(&image, width, height);
    }
    apply_mask(&mut image, spec.mask);
    image
}

/// Build the finished image for one region.
///
/// `skin` must already be RGBA; sources without an alpha channel convert to
/// fully opaque. When `overlay` is set and the region is the head, the hat
/// layer at [`HEAD_OVERLAY_RECT`] goes through the same resample and mask and is
/// then composited over the base with source-over blending. With `overlay`
/// unset the hat layer is never read.
pub fn compose_region(skin: &RgbaImage, spec: &RegionSpec, overlay: bool) -> RegionImage {
    let mut image = extract_layer(skin, spec.source, spec);

    if overlay && spec.region == Region::Head {
        let hat = extract_layer(skin, HEAD_OVERLAY_RECT, spec);
        composite_over(&mut image, &hat);
    }

    log::debug!(
        "composed {} ({}x{}) for ({}, {})",
        spec.region,
        image.width(),
        image.height(),
        spec.dest.x,
        spec.dest.y
    );

    RegionImage { region: spec.region, image, dest: spec.dest }
}
