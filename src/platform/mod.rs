//! CODING platform services
//!
//! Provides the open API client and repository resolution.

mod coding;
mod detection;
mod resolve;

pub use coding::CodingService;
pub use detection::{ApiBase, derive_api_base};
pub use resolve::{resolve_current, resolve_repository};

use crate::error::Result;
use crate::types::{MergeRequestInfo, MergeRequestSpec, Repository};
use async_trait::async_trait;

/// Platform service trait for the calls this tool makes
///
/// Abstracts the HTTP client so submission logic can run against a mock.
#[async_trait]
pub trait CodingPlatform: Send + Sync {
    /// List the repositories the token's owner can access
    async fn list_my_repositories(&self) -> Result<Vec<Repository>>;

    /// Create one merge request
    async fn create_merge_request(&self, spec: &MergeRequestSpec) -> Result<MergeRequestInfo>;
}
