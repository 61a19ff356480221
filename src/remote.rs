//! HTTP lookups: player name to profile id, profile id to skin

use serde::Deserialize;
use std::io::Read;
use std::time::Duration;

use crate::skin::{LookupError, ProfileResolver, SkinFetcher};

/// Profile lookup endpoint; the player name is appended
pub const PROFILE_URL: &str = "https://api.mojang.com/users/profiles/minecraft";
/// Skin download endpoint; the profile id is appended
pub const SKIN_URL: &str = "https://crafatar.com/skins";

/// Largest skin download accepted
const MAX_SKIN_BYTES: u64 = 4 * 1024 * 1024;

#[derive(Debug, Deserialize)]
struct Profile {
    id: String,
}

/// Blocking client for the public profile and skin services
#[derive(Debug, Clone)]
pub struct MojangClient {
    agent: ureq::Agent,
    profile_url: String,
    skin_url: String,
}

impl Default for MojangClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MojangClient {
    pub fn new() -> Self {
        Self::with_endpoints(PROFILE_URL, SKIN_URL)
    }

    /// Client against other base URLs (mirrors, local test servers).
    pub fn with_endpoints(profile_url: impl Into<String>, skin_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(Duration::from_secs(15)).build();
        Self {
            agent,
            profile_url: profile_url.into().trim_end_matches('/').to_string(),
            skin_url: skin_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn get(&self, url: &str) -> Result<ureq::Response, LookupError> {
        log::debug!("GET {}", url);
        match self.agent.get(url).call() {
            Ok(resp) if resp.status() == 200 => Ok(resp),
            Ok(resp) => Err(classify_status(resp.status())),
            Err(ureq::Error::Status(code, _)) => Err(classify_status(code)),
            Err(e) => Err(LookupError::Transport(e.to_string())),
        }
    }
}

/// Map a non-200 status to a lookup failure.
///
/// The profile service answers unknown names with 204 or 404; any other
/// client error is treated the same way. Server errors are transport failures.
fn classify_status(code: u16) -> LookupError {
    match code {
        200..=499 => LookupError::NotFound,
        _ => LookupError::Transport(format!("HTTP {}", code)),
    }
}

fn parse_profile(body: &str) -> Result<String, LookupError> {
    let profile: Profile = serde_json::from_str(body)
        .map_err(|e| LookupError::Transport(format!("Malformed profile response: {}", e)))?;
    Ok(profile.id)
}

impl ProfileResolver for MojangClient {
    fn resolve_id(&self, name: &str) -> Result<String, LookupError> {
        let resp = self.get(&format!("{}/{}", self.profile_url, name))?;
        let body = resp
            .into_string()
            .map_err(|e| LookupError::Transport(format!("Failed to read profile response: {}", e)))?;
        parse_profile(&body)
    }
}

impl SkinFetcher for MojangClient {
    fn fetch_skin(&self, id: &str) -> Result<Vec<u8>, LookupError> {
        let resp = self.get(&format!("{}/{}", self.skin_url, id))?;
        read_skin_body(resp.into_reader())
    }
}

/// Read a skin download, rejecting bodies over [`MAX_SKIN_BYTES`].
fn read_skin_body(reader: impl Read) -> Result<Vec<u8>, LookupError> {
    let mut bytes = Vec::new();
    reader
        .take(MAX_SKIN_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| LookupError::Transport(format!("Failed to read skin: {}", e)))?;
    if bytes.len() as u64 > MAX_SKIN_BYTES {
        return Err(LookupError::Transport(format!(
            "skin larger than {} MiB",
            MAX_SKIN_BYTES / (1024 * 1024)
        )));
    }
    Ok(bytes)
}
