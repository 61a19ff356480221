//! Seam touch-ups applied once after every region is pasted

use image::RgbaImage;

/// One pixel copy: `to` receives the full RGBA value read from `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeamCopy {
    pub to: (u32, u32),
    pub from: (u32, u32),
}

const fn copy(to: (u32, u32), from: (u32, u32)) -> SeamCopy {
    SeamCopy { to, from }
}

/// The copies, in application order.
///
/// Shoulder tops are filled from the pixel below, then the columns between the
/// arms and the body are filled from the body's outer columns.
pub const SEAM_COPIES: [SeamCopy; 24] = [
    copy((10, 16), (10, 17)),
    copy((11, 16), (12, 16)),
    copy((11, 17), (12, 17)),
    copy((11, 18), (12, 18)),
    copy((11, 19), (12, 19)),
    copy((11, 20), (12, 20)),
    copy((11, 21), (12, 21)),
    copy((11, 22), (12, 22)),
    copy((11, 23), (12, 23)),
    copy((11, 24), (12, 24)),
    copy((11, 25), (12, 25)),
    copy((11, 26), (12, 26)),
    copy((20, 16), (19, 16)),
    copy((20, 17), (19, 17)),
    copy((20, 18), (19, 18)),
    copy((20, 19), (19, 19)),
    copy((20, 20), (19, 20)),
    copy((20, 21), (19, 21)),
    copy((20, 22), (19, 22)),
    copy((20, 23), (19, 23)),
    copy((20, 24), (19, 24)),
    copy((20, 25), (19, 25)),
    copy((20, 26), (19, 26)),
    copy((21, 16), (21, 17)),
];

/// Apply [`SEAM_COPIES`] to an assembled totem.
///
/// Each copy reads then writes, so later copies observe earlier ones. Copies
/// touching coordinates outside the image are skipped.
pub fn apply_finishing_pass(canvas: &mut RgbaImage) {
    let (width, height) = canvas.dimensions();
    let inside = |(x, y): (u32, u32)| x < width && y < height;

    for seam in &SEAM_COPIES {
        if !inside(seam.to) || !inside(seam.from) {
            continue;
        }
        let pixel = *canvas.get_pixel(seam.from.0, seam.from.1);
        canvas.put_pixel(seam.to.0, seam.to.1, pixel);
    }
}
