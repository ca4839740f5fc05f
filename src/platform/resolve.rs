//! Repository resolution
//!
//! Finds the depot whose HTTPS URL equals the local remote.

use crate::error::{Error, Result};
use crate::platform::CodingPlatform;
use crate::types::Repository;
use tracing::debug;

/// First repository whose `https_url` equals `remote_url` exactly
pub fn resolve_current<'a>(
    repositories: &'a [Repository],
    remote_url: &str,
) -> Option<&'a Repository> {
    repositories.iter().find(|r| r.https_url == remote_url)
}

/// List the caller's repositories and pick the one matching `remote_url`
///
/// No match is fatal: merge requests need a depot id.
pub async fn resolve_repository(
    platform: &dyn CodingPlatform,
    remote_url: &str,
) -> Result<Repository> {
    let repositories = platform.list_my_repositories().await?;
    let repository = resolve_current(&repositories, remote_url)
        .cloned()
        .ok_or_else(|| Error::RepositoryNotFound(remote_url.to_string()))?;

    debug!(id = repository.id, name = %repository.name, "resolved repository");
    Ok(repository)
}
