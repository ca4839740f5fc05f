//! Merge request submission
//!
//! Three-phase pattern:
//! 1. Resolve - find the repository (see [`crate::platform::resolve_repository`])
//! 2. Plan - build one `MergeRequestSpec` per destination (pure, testable)
//! 3. Execute - create the merge requests one after another (effectful)

mod execute;
mod plan;
mod progress;

pub use execute::{SubmissionResult, execute_submission};
pub use plan::{
    DEFAULT_CONTENT, SubmissionOptions, SubmissionPlan, create_submission_plan,
    parse_destinations,
};
pub use progress::{NoopProgress, ProgressCallback};
