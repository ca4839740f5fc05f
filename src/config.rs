//! Runtime configuration
//!
//! Values come from, in order of precedence: environment variables, the
//! TOML file in the user config directory, and git configuration.

use crate::error::{Error, Result};
use crate::repo::{self, DEFAULT_REMOTE};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Git config key holding the CODING API token
pub const TOKEN_KEY: &str = "user.codingToken";

/// Git config key holding the chat webhook URL
pub const WEBHOOK_KEY: &str = "user.weRobot";

/// Environment variable overriding the token
pub const TOKEN_ENV: &str = "CODING_TOKEN";

/// Environment variable overriding the webhook URL
pub const WEBHOOK_ENV: &str = "CODING_WEBHOOK_URL";

/// Environment variable overriding the remote name
pub const REMOTE_ENV: &str = "CODING_REMOTE";

/// Environment variable overriding the API endpoint derived from the remote
pub const API_BASE_ENV: &str = "CODING_API_BASE";

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const CONFIG_DIR: &str = "coding-mr";
const CONFIG_FILE: &str = "config.toml";

/// Optional settings file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// CODING API token
    pub token: Option<String>,
    /// Chat webhook URL
    pub webhook_url: Option<String>,
    /// Remote name
    pub remote: Option<String>,
    /// API endpoint, replacing the one derived from the remote
    pub api_base: Option<String>,
    /// HTTP timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Load a settings file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))
    }
}

/// Path of the settings file, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Resolved configuration, built once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// CODING API token
    pub token: String,
    /// Chat webhook URL; only required when a notification is sent
    pub webhook_url: Option<String>,
    /// Remote whose URL identifies the repository
    pub remote: String,
    /// Explicit API endpoint
    pub api_base: Option<String>,
    /// Timeout for every HTTP call
    ///
    /// Deliberately bounded, unlike the unlimited client default.
    pub timeout: Duration,
}

impl Config {
    /// Load from the process environment, the default settings file and git
    /// config as seen from `dir`
    pub fn load(dir: &Path) -> Result<Self> {
        let file = match default_config_path() {
            Some(path) => {
                debug!(path = %path.display(), "loading settings file");
                FileConfig::load(&path)?
            }
            None => FileConfig::default(),
        };

        Self::from_sources(
            |name| std::env::var(name).ok(),
            &file,
            |key| repo::try_config_value(dir, key),
        )
    }

    /// Resolve every value from explicit sources
    ///
    /// `env` looks up environment variables, `git` looks up git config keys.
    /// The git lookup is only consulted for values the other sources lack.
    pub fn from_sources<E, G>(env: E, file: &FileConfig, git: G) -> Result<Self>
    where
        E: Fn(&str) -> Option<String>,
        G: Fn(&str) -> Result<Option<String>>,
    {
        let token = resolve(&env, TOKEN_ENV, file.token.as_deref(), &git, TOKEN_KEY)?
            .ok_or_else(|| Error::ConfigMissing {
                key: TOKEN_KEY.to_string(),
            })?;

        let webhook_url = resolve(
            &env,
            WEBHOOK_ENV,
            file.webhook_url.as_deref(),
            &git,
            WEBHOOK_KEY,
        )?;
        if let Some(webhook_url) = &webhook_url {
            validate_url(webhook_url, "webhook URL")?;
        }

        let remote = non_empty(env(REMOTE_ENV))
            .or_else(|| non_empty(file.remote.clone()))
            .unwrap_or_else(|| DEFAULT_REMOTE.to_string());

        let api_base = non_empty(env(API_BASE_ENV)).or_else(|| non_empty(file.api_base.clone()));
        if let Some(api_base) = &api_base {
            validate_url(api_base, "API base")?;
        }

        let timeout = Duration::from_secs(file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));

        Ok(Self {
            token,
            webhook_url,
            remote,
            api_base,
            timeout,
        })
    }

    /// The webhook URL, or `ConfigMissing` when no source provides one
    pub fn require_webhook_url(&self) -> Result<&str> {
        self.webhook_url
            .as_deref()
            .ok_or_else(|| Error::ConfigMissing {
                key: WEBHOOK_KEY.to_string(),
            })
    }
}

fn validate_url(value: &str, what: &str) -> Result<()> {
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|e| Error::Config(format!("{what} '{value}' is invalid: {e}")))
}

fn resolve<E, G>(
    env: &E,
    env_name: &str,
    file_value: Option<&str>,
    git: &G,
    git_key: &str,
) -> Result<Option<String>>
where
    E: Fn(&str) -> Option<String>,
    G: Fn(&str) -> Result<Option<String>>,
{
    if let Some(value) = non_empty(env(env_name)) {
        debug!(source = env_name, "config value from environment");
        return Ok(Some(value));
    }
    if let Some(value) = non_empty(file_value.map(ToString::to_string)) {
        debug!(key = git_key, "config value from settings file");
        return Ok(Some(value));
    }
    Ok(non_empty(git(git_key)?))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
