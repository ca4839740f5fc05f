//! API base detection from a git remote URL

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Host that serves CODING git remotes
pub const REMOTE_HOST: &str = "e.coding.net";

/// Domain under which each team's API lives
pub const API_DOMAIN: &str = "coding.net";

static REMOTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^https://{}/([\w-]+)/", regex::escape(REMOTE_HOST)))
        .expect("remote pattern is valid")
});

/// The per-team API endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase {
    /// Team slug taken from the remote URL
    pub team: String,
    /// Full API URL, e.g. `https://acme.coding.net/open-api`
    pub url: String,
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Derive the API base from a remote such as `https://e.coding.net/acme/widget.git`
pub fn derive_api_base(remote_url: &str) -> Result<ApiBase> {
    let team = REMOTE_RE
        .captures(remote_url.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| Error::UnsupportedRemote(remote_url.to_string()))?;

    let url = format!("https://{team}.{API_DOMAIN}/open-api");
    Ok(ApiBase { team, url })
}
