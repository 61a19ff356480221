//! The skin-to-totem conversion pipeline
//!
//! One linear pass per conversion:
//!
//! 1. compose each region in table order (head, left arm, right arm, body)
//! 2. stencil-paste it onto a fresh transparent 32x32 canvas
//! 3. run the seam finishing pass
//! 4. composite the optional outline
//!
//! A [`TotemGenerator`] holds no per-conversion state, so one instance can be
//! shared across threads converting different skins.

use image::RgbaImage;

use crate::canvas::Canvas;
use crate::compose::compose_region;
use crate::error::TotemError;
use crate::finish::apply_finishing_pass;
use crate::outline::OutlineOverlay;
use crate::regions::REGION_TABLE;
use crate::resample::scale_image;
use crate::skin::skin_size_warning;

/// Per-conversion switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotemOptions {
    /// Composite the hat layer over the head.
    pub overlay: bool,
}

impl Default for TotemOptions {
    fn default() -> Self {
        Self { overlay: true }
    }
}

/// Decode skin bytes into RGBA.
///
/// Images without an alpha channel become fully opaque.
pub fn decode_skin(bytes: &[u8]) -> Result<RgbaImage, TotemError> {
    let skin = image::load_from_memory(bytes)?.to_rgba8();
    if let Some(warning) = skin_size_warning(skin.width(), skin.height()) {
        log::warn!("{}", warning.message);
    }
    Ok(skin)
}

/// Converts skins to totem textures
#[derive(Debug, Clone, Default)]
pub struct TotemGenerator {
    options: TotemOptions,
    outline: OutlineOverlay,
}

impl TotemGenerator {
    pub fn new(options: TotemOptions, outline: OutlineOverlay) -> Self {
        Self { options, outline }
    }

    pub fn options(&self) -> TotemOptions {
        self.options
    }

    pub fn outline(&self) -> &OutlineOverlay {
        &self.outline
    }

    /// Place every region and apply the finishing pass, without the outline.
    pub fn assemble(&self, skin: &RgbaImage) -> RgbaImage {
        let mut canvas = Canvas::new();
        for spec in &REGION_TABLE {
            let region = compose_region(skin, spec, self.options.overlay);
            canvas.paste_region(&region);
        }
        apply_finishing_pass(canvas.image_mut());
        canvas.into_image()
    }

    /// Run the full pipeline on a decoded skin.
    ///
    /// Always returns a 32x32 image. Identical inputs give identical output.
    pub fn generate(&self, skin: &RgbaImage) -> RgbaImage {
        let mut totem = self.assemble(skin);
        if self.outline.apply(&mut totem) {
            log::debug!("outline applied");
        }
        totem
    }

    /// Decode `bytes` and run the full pipeline.
    ///
    /// Undecodable input is the only failure.
    pub fn generate_from_bytes(&self, bytes: &[u8]) -> Result<RgbaImage, TotemError> {
        let skin = decode_skin(bytes)?;
        Ok(self.generate(&skin))
    }
}

/// Nearest-neighbor enlargement of a finished totem for export.
pub fn export_variant(totem: &RgbaImage, scale: u32) -> RgbaImage {
    scale_image(totem.clone(), scale)
}
