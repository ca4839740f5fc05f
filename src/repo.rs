//! Local git inspection
//!
//! Shells out to the `git` binary for the current branch, remote URLs and
//! configuration values.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

/// Default remote name
pub const DEFAULT_REMOTE: &str = "origin";

/// A git working tree
#[derive(Debug, Clone)]
pub struct GitWorkspace {
    root: PathBuf,
}

impl GitWorkspace {
    /// Open the working tree containing `path`
    pub fn open(path: &Path) -> Result<Self> {
        let output = run_git(path, &["rev-parse", "--show-toplevel"])?;
        if !output.status.success() {
            return Err(Error::Environment(format!(
                "{} is not inside a git repository",
                path.display()
            )));
        }
        let root = PathBuf::from(stdout_trimmed(&output));
        debug!(root = %root.display(), "opened git workspace");
        Ok(Self { root })
    }

    /// Root directory of the working tree
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Name of the checked-out branch
    pub fn current_branch(&self) -> Result<String> {
        let output = run_git(&self.root, &["rev-parse", "--abbrev-ref", "HEAD"])?;
        if !output.status.success() {
            return Err(Error::Environment(
                "could not determine the current branch (no commits yet?)".to_string(),
            ));
        }
        let branch = stdout_trimmed(&output);
        if branch.is_empty() || branch == "HEAD" {
            return Err(Error::Environment(
                "HEAD is detached; pass the source branch with -s".to_string(),
            ));
        }
        Ok(branch)
    }

    /// URL of the named remote
    ///
    /// When the remote has several URLs the first one wins.
    pub fn remote_url(&self, remote_name: &str) -> Result<String> {
        let output = run_git(&self.root, &["remote", "get-url", "--all", remote_name])?;
        if !output.status.success() {
            return Err(Error::Environment(format!(
                "remote '{remote_name}' is not configured"
            )));
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(ToString::to_string)
            .ok_or_else(|| Error::Environment(format!("remote '{remote_name}' has no URL")))
    }
}

/// Read a git configuration value, failing with `ConfigMissing` if unset
pub fn config_value(dir: &Path, key: &str) -> Result<String> {
    try_config_value(dir, key)?.ok_or_else(|| Error::ConfigMissing {
        key: key.to_string(),
    })
}

/// Read a git configuration value, `None` if unset or empty
pub fn try_config_value(dir: &Path, key: &str) -> Result<Option<String>> {
    let output = run_git(dir, &["config", "--get", key])?;
    // `git config --get` exits 1 for a missing key
    if !output.status.success() {
        debug!(key, "git config key not set");
        return Ok(None);
    }
    let value = stdout_trimmed(&output);
    Ok((!value.is_empty()).then_some(value))
}

fn run_git(dir: &Path, args: &[&str]) -> Result<Output> {
    debug!(?args, dir = %dir.display(), "running git");
    Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| Error::Environment(format!("failed to run git: {e}")))
}

fn stdout_trimmed(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
