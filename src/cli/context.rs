//! Shared command context
//!
//! Gathers everything the submit command needs from the local checkout and
//! configuration before any network call is made.

use coding_mr::config::Config;
use coding_mr::error::Result;
use coding_mr::platform::{ApiBase, CodingService, derive_api_base};
use coding_mr::repo::GitWorkspace;
use std::path::Path;
use tracing::debug;

/// Local state and clients for one run
pub struct CommandContext {
    /// The git working tree
    pub workspace: GitWorkspace,
    /// Resolved configuration
    pub config: Config,
    /// Branch the merge requests are opened from
    pub source_branch: String,
    /// URL of the selected remote
    pub remote_url: String,
    /// API endpoint derived from the remote or configured explicitly
    pub api_base: ApiBase,
    /// CODING API client
    pub platform: CodingService,
}

impl CommandContext {
    /// Create a new command context
    ///
    /// - Open the workspace
    /// - Pick the source branch (explicit, else the current branch)
    /// - Load configuration
    /// - Read the remote URL and derive the API base, unless configured
    pub fn new(path: &Path, source: Option<&str>, remote: Option<&str>) -> Result<Self> {
        let workspace = GitWorkspace::open(path)?;

        let source_branch = match source {
            Some(branch) => branch.to_string(),
            None => workspace.current_branch()?,
        };

        let mut config = Config::load(workspace.root())?;
        if let Some(remote) = remote {
            config.remote = remote.to_string();
        }

        let remote_url = workspace.remote_url(&config.remote)?;
        let mut api_base = derive_api_base(&remote_url)?;
        if let Some(url) = &config.api_base {
            debug!(derived = %api_base, %url, "API base overridden by configuration");
            api_base.url.clone_from(url);
        }
        debug!(%remote_url, %api_base, %source_branch, "command context ready");

        let platform = CodingService::new(api_base.url.clone(), &config.token, config.timeout)?;

        Ok(Self {
            workspace,
            config,
            source_branch,
            remote_url,
            api_base,
            platform,
        })
    }
}
