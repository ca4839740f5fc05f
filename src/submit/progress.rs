//! Progress reporting for submission

use crate::error::Error;
use crate::types::{MergeRequestInfo, MergeRequestSpec};
use async_trait::async_trait;

/// Receives events while merge requests are created
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// About to create the merge request for `spec`
    async fn on_request_started(&self, spec: &MergeRequestSpec);

    /// A merge request was created
    async fn on_request_created(&self, info: &MergeRequestInfo);

    /// Creating the merge request for `spec` failed
    async fn on_error(&self, spec: &MergeRequestSpec, error: &Error);
}

/// Progress callback that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_request_started(&self, _spec: &MergeRequestSpec) {}

    async fn on_request_created(&self, _info: &MergeRequestInfo) {}

    async fn on_error(&self, _spec: &MergeRequestSpec, _error: &Error) {}
}
