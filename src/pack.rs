//! Resource pack output
//!
//! Lays a finished totem out as a Java Edition resource pack, either as a
//! deflated zip archive or as a plain directory:
//!
//! ```text
//! pack.png                                             (enlarged icon)
//! pack.mcmeta
//! assets/minecraft/textures/item/totem_of_undying.png  (32x32 texture)
//! ```

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::config::PackConfig;
use crate::output::{encode_png, OutputError};
use crate::resample::scale_image;

/// Location of the item texture inside a pack
pub const TEXTURE_PATH: &str = "assets/minecraft/textures/item/totem_of_undying.png";
/// Pack icon file name
pub const ICON_PATH: &str = "pack.png";
/// Metadata file name
pub const META_PATH: &str = "pack.mcmeta";

/// The `pack.mcmeta` document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackMeta {
    pub pack: PackSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackSection {
    pub description: String,
    pub pack_format: u32,
    pub supported_formats: FormatRange,
}

/// Inclusive range of pack formats the pack declares support for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatRange {
    pub min_inclusive: u32,
    pub max_inclusive: u32,
}

impl From<&PackConfig> for PackMeta {
    fn from(config: &PackConfig) -> Self {
        PackMeta {
            pack: PackSection {
                description: config.description.clone(),
                pack_format: config.pack_format,
                supported_formats: FormatRange {
                    min_inclusive: config.min_format,
                    max_inclusive: config.max_format,
                },
            },
        }
    }
}

impl PackMeta {
    /// Pretty-printed JSON with non-ASCII characters kept as-is.
    pub fn to_json(&self) -> String {
        // A struct of strings and integers always serializes
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// How a pack is written to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackLayout {
    /// A single deflated `.zip` file
    Archive,
    /// A directory tree
    Directory,
}

impl PackLayout {
    /// Paths ending in `.zip` (any case) are archives; everything else is a directory.
    pub fn for_path(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("zip") => PackLayout::Archive,
            _ => PackLayout::Directory,
        }
    }
}

/// Encoded pack files as `(entry path, contents)`, in archive order.
///
/// The icon is the totem enlarged `icon_scale` times with nearest-neighbor
/// sampling.
pub fn pack_entries(
    totem: &RgbaImage,
    icon_scale: u32,
    config: &PackConfig,
) -> Result<Vec<(&'static str, Vec<u8>)>, OutputError> {
    Ok(vec![
        (ICON_PATH, encode_png(&scale_image(totem.clone(), icon_scale))?),
        (META_PATH, PackMeta::from(config).to_json().into_bytes()),
        (TEXTURE_PATH, encode_png(totem)?),
    ])
}

/// Files written by [`write_pack`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackFiles {
    pub meta: PathBuf,
    pub icon: PathBuf,
    pub texture: PathBuf,
}

/// Write `totem` as a resource pack directory rooted at `dir`.
///
/// Existing files are overwritten.
pub fn write_pack(
    dir: &Path,
    totem: &RgbaImage,
    icon_scale: u32,
    config: &PackConfig,
) -> Result<PackFiles, OutputError> {
    for (entry, bytes) in pack_entries(totem, icon_scale, config)? {
        let path = dir.join(entry);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, bytes)?;
    }

    log::debug!("wrote resource pack to {}", dir.display());
    Ok(PackFiles {
        meta: dir.join(META_PATH),
        icon: dir.join(ICON_PATH),
        texture: dir.join(TEXTURE_PATH),
    })
}

/// Write `totem` as a deflated resource pack archive at `path`.
///
/// Parent directories are created when missing. An existing file is replaced.
pub fn write_pack_archive(
    path: &Path,
    totem: &RgbaImage,
    icon_scale: u32,
    config: &PackConfig,
) -> Result<(), OutputError> {
    let entries = pack_entries(totem, icon_scale, config)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut zip = ZipWriter::new(File::create(path)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (entry, bytes) in entries {
        zip.start_file(entry, options)?;
        zip.write_all(&bytes)?;
    }
    zip.finish()?;

    log::debug!("wrote resource pack archive {}", path.display());
    Ok(())
}
