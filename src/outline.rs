//! Optional decorative outline drawn over the finished totem
//!
//! The outline is best-effort: a missing, unreadable or undecodable outline is
//! logged and skipped, never surfaced as an error.

use image::RgbaImage;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::blend::composite_over;
use crate::regions::TOTEM_SIZE;
use crate::resample::resize_nearest;

/// Where the outline image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineSource {
    /// An image file read on each use.
    File(PathBuf),
    /// Encoded image bytes held in memory.
    Bytes(Vec<u8>),
}

impl OutlineSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        OutlineSource::File(path.into())
    }

    fn describe(&self) -> String {
        match self {
            OutlineSource::File(path) => path.display().to_string(),
            OutlineSource::Bytes(bytes) => format!("<{} bytes>", bytes.len()),
        }
    }
}

/// Why an outline could not be used
#[derive(Debug, Error)]
pub enum OutlineError {
    #[error("Failed to read outline '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to decode outline: {0}")]
    Decode(#[from] image::ImageError),
}

fn read_file(path: &Path) -> Result<Vec<u8>, OutlineError> {
    std::fs::read(path).map_err(|source| OutlineError::Io { path: path.to_path_buf(), source })
}

/// Load an outline as a [`TOTEM_SIZE`] square RGBA image.
///
/// Images of any other size are resized with nearest-neighbor sampling.
pub fn load_outline(source: &OutlineSource) -> Result<RgbaImage, OutlineError> {
    let decoded = match source {
        OutlineSource::File(path) => image::load_from_memory(&read_file(path)?)?,
        OutlineSource::Bytes(bytes) => image::load_from_memory(bytes)?,
    };
    let outline = decoded.to_rgba8();

    if outline.dimensions() == (TOTEM_SIZE, TOTEM_SIZE) {
        Ok(outline)
    } else {
        log::debug!(
            "resizing outline from {}x{} to {}x{}",
            outline.width(),
            outline.height(),
            TOTEM_SIZE,
            TOTEM_SIZE
        );
        Ok(resize_nearest(&outline, TOTEM_SIZE, TOTEM_SIZE))
    }
}

/// The last pipeline stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutlineOverlay {
    source: Option<OutlineSource>,
}

impl OutlineOverlay {
    pub fn new(source: Option<OutlineSource>) -> Self {
        Self { source }
    }

    /// An overlay that never draws anything.
    pub fn none() -> Self {
        Self { source: None }
    }

    pub fn source(&self) -> Option<&OutlineSource> {
        self.source.as_ref()
    }

    /// Composite the outline over `canvas` if one can be loaded.
    ///
    /// Returns whether the outline was drawn. On any failure the canvas is left
    /// exactly as it was and a warning is logged.
    pub fn apply(&self, canvas: &mut RgbaImage) -> bool {
        let Some(source) = &self.source else {
            return false;
        };

        match load_outline(source) {
            Ok(outline) => {
                composite_over(canvas, &outline);
                true
            }
            Err(e) => {
                log::warn!("skipping outline {}: {}", source.describe(), e);
                false
            }
        }
    }
}
