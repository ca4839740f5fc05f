//! Submission execution - effectful operations
//!
//! Takes a `SubmissionPlan` and creates the merge requests through the
//! platform, one after another.

use crate::error::{Error, Result};
use crate::platform::CodingPlatform;
use crate::submit::plan::SubmissionPlan;
use crate::submit::progress::ProgressCallback;
use crate::types::MergeRequestInfo;
use tracing::debug;

/// Result of submission
#[derive(Debug, Default)]
pub struct SubmissionResult {
    /// Merge requests created, in plan order
    pub created: Vec<MergeRequestInfo>,
    /// Destination branch whose create-call failed (if any)
    pub failed_branch: Option<String>,
    /// Error from the failed create-call (if any)
    pub error: Option<Error>,
}

impl SubmissionResult {
    /// Check if every planned merge request was created
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Created merge requests, or the error that stopped the run
    pub fn into_result(self) -> Result<Vec<MergeRequestInfo>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.created),
        }
    }
}

/// Execute the submission plan (EFFECTFUL)
///
/// Requests are sent sequentially in plan order. The first failure stops
/// the run; requests already created are kept in the result.
pub async fn execute_submission(
    plan: &SubmissionPlan,
    platform: &dyn CodingPlatform,
    progress: &dyn ProgressCallback,
) -> SubmissionResult {
    let mut result = SubmissionResult::default();

    for spec in &plan.requests {
        progress.on_request_started(spec).await;

        match platform.create_merge_request(spec).await {
            Ok(info) => {
                progress.on_request_created(&info).await;
                result.created.push(info);
            }
            Err(e) => {
                debug!(destination = %spec.destination_branch, error = %e, "submission stopped");
                progress.on_error(spec, &e).await;
                result.failed_branch = Some(spec.destination_branch.clone());
                result.error = Some(e);
                break;
            }
        }
    }

    result
}
