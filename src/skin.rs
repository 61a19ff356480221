//! Getting skin bytes: direct upload or player lookup
//!
//! Player lookups go through two collaborators, [`ProfileResolver`] and
//! [`SkinFetcher`]. The crate ships HTTP implementations in `remote`; tests and
//! embedders can supply their own.

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;

use crate::error::TotemError;

/// Skin sizes the region table was laid out for (and their integer multiples).
pub const TYPICAL_SKIN_SIZES: [(u32, u32); 5] =
    [(64, 32), (64, 64), (128, 128), (256, 256), (512, 512)];

/// A warning about an input that is still converted
#[derive(Debug, Clone, PartialEq)]
pub struct Warning {
    pub message: String,
}

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Failure reported by a lookup collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The service answered but has no such entry
    #[error("not found")]
    NotFound,
    /// The service could not be reached or answered unexpectedly
    #[error("{0}")]
    Transport(String),
}

/// Resolves a player name to a unique profile identifier.
pub trait ProfileResolver {
    fn resolve_id(&self, name: &str) -> Result<String, LookupError>;
}

/// Downloads the encoded skin image for a profile identifier.
pub trait SkinFetcher {
    fn fetch_skin(&self, id: &str) -> Result<Vec<u8>, LookupError>;
}

/// Where a conversion gets its skin from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkinSource {
    /// Encoded image bytes supplied directly; no lookups happen.
    Upload(Vec<u8>),
    /// A player name resolved and fetched through the collaborators.
    Player(String),
}

impl SkinSource {
    /// Read an uploaded skin from disk.
    pub fn from_file(path: &Path) -> Result<Self, TotemError> {
        std::fs::read(path).map(SkinSource::Upload).map_err(|e| TotemError::io(path, e))
    }
}

fn player_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]{1,16}$").expect("static pattern is valid"))
}

/// Check that `name` can be an account name before sending it anywhere.
pub fn validate_player_name(name: &str) -> Result<(), TotemError> {
    if player_name_pattern().is_match(name) {
        Ok(())
    } else {
        Err(TotemError::InvalidPlayerName(name.to_string()))
    }
}

/// Produce encoded skin bytes for `source`.
///
/// Uploads are returned as-is. Player names are validated, resolved and then
/// fetched; each step is attempted once.
pub fn acquire_skin<R, F>(source: SkinSource, resolver: &R, fetcher: &F) -> Result<Vec<u8>, TotemError>
where
    R: ProfileResolver + ?Sized,
    F: SkinFetcher + ?Sized,
{
    let name = match source {
        SkinSource::Upload(bytes) => return Ok(bytes),
        SkinSource::Player(name) => name,
    };
    validate_player_name(&name)?;

    let id = match resolver.resolve_id(&name) {
        Ok(id) => id,
        Err(LookupError::NotFound) => return Err(TotemError::Resolution { name }),
        Err(LookupError::Transport(reason)) => return Err(TotemError::Fetch { reason }),
    };
    log::debug!("resolved player '{}' to {}", name, id);

    fetcher.fetch_skin(&id).map_err(|e| match e {
        LookupError::NotFound => TotemError::Fetch { reason: format!("no skin for profile {}", id) },
        LookupError::Transport(reason) => TotemError::Fetch { reason },
    })
}

/// Warn about skins whose size is not one of [`TYPICAL_SKIN_SIZES`].
///
/// Such skins are still converted; regions falling outside them come out
/// transparent.
pub fn skin_size_warning(width: u32, height: u32) -> Option<Warning> {
    if TYPICAL_SKIN_SIZES.contains(&(width, height)) {
        return None;
    }
    let typical: Vec<String> = TYPICAL_SKIN_SIZES.iter().map(|(w, h)| format!("{}x{}", w, h)).collect();
    Some(Warning::new(format!(
        "Unusual skin size {}x{} (typical sizes: {}); the totem may be incomplete",
        width,
        height,
        typical.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeProfiles {
        calls: Cell<usize>,
        result: Result<String, LookupError>,
    }

    impl ProfileResolver for FakeProfiles {
        fn resolve_id(&self, _name: &str) -> Result<String, LookupError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    struct FakeSkins(Result<Vec<u8>, LookupError>);

    impl SkinFetcher for FakeSkins {
        fn fetch_skin(&self, _id: &str) -> Result<Vec<u8>, LookupError> {
            self.0.clone()
        }
    }

    fn profiles(result: Result<String, LookupError>) -> FakeProfiles {
        FakeProfiles { calls: Cell::new(0), result }
    }

    #[test]
    fn test_upload_skips_lookups() {
        let resolver = profiles(Err(LookupError::NotFound));
        let bytes = acquire_skin(SkinSource::Upload(vec![1, 2, 3]), &resolver, &FakeSkins(Ok(vec![])))
            .unwrap();
        assert_eq!(bytes, vec![1, 2, 3]);
        assert_eq!(resolver.calls.get(), 0);
    }

    #[test]
    fn test_player_lookup() {
        let resolver = profiles(Ok("069a79f444e94726a5befca90e38aaf5".to_string()));
        let bytes =
            acquire_skin(SkinSource::Player("Notch".into()), &resolver, &FakeSkins(Ok(vec![9])))
                .unwrap();
        assert_eq!(bytes, vec![9]);
        assert_eq!(resolver.calls.get(), 1);
    }

    #[test]
    fn test_unknown_player_is_resolution_failure() {
        let resolver = profiles(Err(LookupError::NotFound));
        let err = acquire_skin(SkinSource::Player("Nobody".into()), &resolver, &FakeSkins(Ok(vec![])))
            .unwrap_err();
        assert!(matches!(err, TotemError::Resolution { ref name } if name == "Nobody"));
        assert_eq!(resolver.calls.get(), 1, "lookups are not retried");
    }

    #[test]
    fn test_missing_skin_is_fetch_failure() {
        let resolver = profiles(Ok("abc".to_string()));
        let err = acquire_skin(
            SkinSource::Player("Steve".into()),
            &resolver,
            &FakeSkins(Err(LookupError::NotFound)),
        )
        .unwrap_err();
        assert!(matches!(err, TotemError::Fetch { .. }));
    }

    #[test]
    fn test_transport_error_is_fetch_failure() {
        let resolver = profiles(Err(LookupError::Transport("connection refused".into())));
        let err = acquire_skin(SkinSource::Player("Steve".into()), &resolver, &FakeSkins(Ok(vec![])))
            .unwrap_err();
        assert!(matches!(err, TotemError::Fetch { ref reason } if reason == "connection refused"));
    }

    #[test]
    fn test_invalid_name_never_reaches_resolver() {
        let resolver = profiles(Ok("abc".to_string()));
        let err = acquire_skin(
            SkinSource::Player("bad name!".into()),
            &resolver,
            &FakeSkins(Ok(vec![])),
        )
        .unwrap_err();
        assert!(matches!(err, TotemError::InvalidPlayerName(_)));
        assert_eq!(resolver.calls.get(), 0);
    }

    #[test]
    fn test_validate_player_name() {
        assert!(validate_player_name("Notch").is_ok());
        assert!(validate_player_name("a_b_C_123").is_ok());
        assert!(validate_player_name("").is_err());
        assert!(validate_player_name("seventeen_chars_x").is_err());
        assert!(validate_player_name("../etc").is_err());
    }

    #[test]
    fn test_skin_size_warning() {
        assert!(skin_size_warning(64, 64).is_none());
        assert!(skin_size_warning(64, 32).is_none());
        let warning = skin_size_warning(8, 8).unwrap();
        assert!(warning.message.contains("8x8"));
    }

    #[test]
    fn test_from_file_missing() {
        let err = SkinSource::from_file(Path::new("/no/such/skin.png")).unwrap_err();
        assert!(matches!(err, TotemError::Io { .. }));
    }
}
