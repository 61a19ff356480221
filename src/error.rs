//! Error types for totem conversion

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::output::OutputError;

/// Error from a conversion request.
///
/// Lookup failures terminate the request and are never retried. Problems with
/// the optional outline do not appear here: they are recovered inside the
/// pipeline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TotemError {
    /// The player name does not resolve to a profile
    #[error("Player '{name}' does not exist")]
    Resolution { name: String },
    /// The skin could not be downloaded
    #[error("Could not fetch skin: {reason}")]
    Fetch { reason: String },
    /// The player name is not a valid account name
    #[error("Invalid player name '{0}': expected 1-16 letters, digits or underscores")]
    InvalidPlayerName(String),
    /// The supplied bytes are not a decodable image
    #[error("Failed to decode skin: {0}")]
    Decode(#[from] image::ImageError),
    /// Reading an input file failed
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Writing results failed
    #[error(transparent)]
    Output(#[from] OutputError),
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl TotemError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TotemError::Io { path: path.into(), source }
    }
}
