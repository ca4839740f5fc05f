//! Shared test helpers

#![allow(dead_code)]

mod mock_platform;

pub use mock_platform::MockCodingPlatform;

use coding_mr::submit::{DEFAULT_CONTENT, SubmissionOptions};
use coding_mr::types::Repository;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Remote used by the end-to-end scenario
pub const WIDGET_REMOTE: &str = "https://e.coding.net/acme/widget.git";

/// The `widget` repository as CODING lists it
pub fn widget_repo() -> Repository {
    Repository {
        id: 42,
        https_url: WIDGET_REMOTE.to_string(),
        name: "widget".to_string(),
    }
}

/// A few unrelated repositories plus `widget`
pub fn account_repos() -> Vec<Repository> {
    vec![
        Repository {
            id: 1,
            https_url: "https://e.coding.net/acme/gadget.git".to_string(),
            name: "gadget".to_string(),
        },
        widget_repo(),
        Repository {
            id: 3,
            https_url: "https://e.coding.net/other/widget.git".to_string(),
            name: "widget-fork".to_string(),
        },
    ]
}

/// Submission options for `feature` into `destinations`
pub fn options(destinations: &[&str]) -> SubmissionOptions {
    SubmissionOptions {
        source_branch: "feature".to_string(),
        destinations: destinations.iter().map(ToString::to_string).collect(),
        title: "fix bug".to_string(),
        content: DEFAULT_CONTENT.to_string(),
    }
}

/// A throwaway git repository with an isolated configuration
pub struct TempGitRepo {
    pub dir: TempDir,
    /// Empty file used as the global git config
    pub global_config: TempDir,
}

impl TempGitRepo {
    /// `git init` plus one empty commit on branch `feature`
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let global_config = TempDir::new().expect("create config dir");
        std::fs::write(global_config.path().join("gitconfig"), "").expect("write gitconfig");

        let repo = Self { dir, global_config };
        repo.git(&["init", "-q"]);
        repo.git(&[
            "-c",
            "user.name=Test",
            "-c",
            "user.email=test@example.com",
            "commit",
            "-q",
            "--allow-empty",
            "-m",
            "init",
        ]);
        repo.git(&["checkout", "-q", "-b", "feature"]);
        repo
    }

    /// Root of the working tree
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path to the isolated global config file
    pub fn global_config_path(&self) -> std::path::PathBuf {
        self.global_config.path().join("gitconfig")
    }

    /// Set the `origin` remote
    pub fn set_origin(&self, url: &str) {
        self.git(&["remote", "add", "origin", url]);
    }

    /// Set a repository-local config value
    pub fn set_config(&self, key: &str, value: &str) {
        self.git(&["config", key, value]);
    }

    /// Run git inside the repository, panicking on failure
    pub fn git(&self, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .env("GIT_CONFIG_GLOBAL", self.global_config_path())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .status()
            .expect("run git");
        assert!(status.success(), "git {args:?} failed");
    }
}
