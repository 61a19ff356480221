//! Configuration loading and discovery for `totem.toml`

use super::schema::TotemConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file
pub const CONFIG_FILE_NAME: &str = "totem.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse totem.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// Find totem.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for totem.toml
/// 2. Check XDG_CONFIG_HOME/skintotem/totem.toml (or ~/.config/skintotem/totem.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find totem.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("skintotem").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find totem.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate one. With no config file at all the defaults are returned.
pub fn load_config(path: Option<&Path>) -> Result<TotemConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(TotemConfig::default()),
    }
}

/// Load configuration from a specific file path.
///
/// A relative `render.outline` is made relative to the file's directory.
pub fn load_config_file(path: &Path) -> Result<TotemConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let mut config: TotemConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    if let Some(outline) = config.render.outline.take() {
        config.render.outline = Some(match path.parent() {
            Some(dir) if outline.is_relative() => dir.join(outline),
            _ => outline,
        });
    }

    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_find_config_from_walks_up() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();

        let found = find_config_from(nested).unwrap();
        assert_eq!(found, dir.path().join(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[export]\nscale = 2\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.export.scale, 2);
    }

    #[test]
    fn test_outline_resolved_against_config_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[render]\noutline = \"outline.png\"\n").unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.render.outline, Some(dir.path().join("outline.png")));
    }

    #[test]
    fn test_invalid_config_is_validation_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[export]\nscale = 0\n").unwrap();

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref errors) if errors.len() == 1));
        assert!(err.to_string().contains("export.scale"));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[render\n").unwrap();

        assert!(matches!(load_config_file(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let dir = tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("missing.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
