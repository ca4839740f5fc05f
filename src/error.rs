//! Error types for coding-mr

use thiserror::Error;

/// Errors that can occur while opening merge requests
#[derive(Debug, Error)]
pub enum Error {
    /// Not inside a git working tree, or git could not report the branch/remote
    #[error("git environment error: {0}")]
    Environment(String),

    /// A required configuration value is unset in every source
    #[error("missing configuration value `{key}`")]
    ConfigMissing {
        /// Git configuration key that holds the value
        key: String,
    },

    /// Configuration value present but unusable
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Remote URL is not hosted on CODING
    #[error("not a CODING repository: {0}")]
    UnsupportedRemote(String),

    /// Transport-level HTTP failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// CODING returned an error envelope
    #[error("CODING API error {code}: {message}")]
    Api {
        /// Platform error code
        code: String,
        /// Human-readable message from the platform
        message: String,
        /// Request id echoed by the platform (may be empty)
        request_id: String,
    },

    /// No repository in the user's list matches the local remote
    #[error("no accessible CODING repository matches remote {0}")]
    RepositoryNotFound(String),

    /// Unusable command-line input
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Internal error (terminal, prompt)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for coding-mr operations
pub type Result<T> = std::result::Result<T, Error>;
