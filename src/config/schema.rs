//! Configuration schema types for `totem.toml`
//!
//! Defines the structure and validation rules for totem generation settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default description written to `pack.mcmeta`.
pub const DEFAULT_PACK_DESCRIPTION: &str = "§6Have fun with your custom §bTotem§6!";

/// Rendering section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Composite the head overlay (hat) layer
    #[serde(default = "default_overlay")]
    pub overlay: bool,
    /// Outline image drawn over the finished totem.
    /// Relative paths are resolved against the config file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { overlay: default_overlay(), outline: None }
    }
}

fn default_overlay() -> bool {
    true
}

/// Export section, read by `pack`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Pack icon enlargement (32 * 8 = 256). `render` only writes an
    /// enlarged copy when `--scale` is given.
    #[serde(default = "default_scale")]
    pub scale: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { scale: default_scale() }
    }
}

fn default_scale() -> u32 {
    8
}

/// Resource pack metadata section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackConfig {
    /// Description shown in the resource pack list
    #[serde(default = "default_description")]
    pub description: String,
    /// Declared pack format
    #[serde(default = "default_pack_format")]
    pub pack_format: u32,
    /// Lowest supported format (inclusive)
    #[serde(default = "default_pack_format")]
    pub min_format: u32,
    /// Highest supported format (inclusive)
    #[serde(default = "default_max_format")]
    pub max_format: u32,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            description: default_description(),
            pack_format: default_pack_format(),
            min_format: default_pack_format(),
            max_format: default_max_format(),
        }
    }
}

fn default_description() -> String {
    DEFAULT_PACK_DESCRIPTION.to_string()
}

fn default_pack_format() -> u32 {
    15
}

fn default_max_format() -> u32 {
    99
}

/// Root configuration structure for `totem.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TotemConfig {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub pack: PackConfig,
}

/// A single validation error
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Field path (e.g., "export.scale")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl TotemConfig {
    /// Validate the configuration, returning all problems found.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !(1..=64).contains(&self.export.scale) {
            errors.push(ValidationError {
                field: "export.scale".to_string(),
                message: format!("must be between 1 and 64, got {}", self.export.scale),
            });
        }

        let pack = &self.pack;
        if pack.min_format > pack.max_format {
            errors.push(ValidationError {
                field: "pack.min_format".to_string(),
                message: format!(
                    "must not exceed max_format ({} > {})",
                    pack.min_format, pack.max_format
                ),
            });
        }
        if pack.pack_format < pack.min_format || pack.pack_format > pack.max_format {
            errors.push(ValidationError {
                field: "pack.pack_format".to_string(),
                message: format!(
                    "{} is outside the supported range {}..={}",
                    pack.pack_format, pack.min_format, pack.max_format
                ),
            });
        }

        errors
    }
}
