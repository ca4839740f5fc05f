//! Submission planning - pure functions
//!
//! Turns the user's options and the resolved repository into the ordered
//! list of create-calls. No I/O happens here.

use crate::error::{Error, Result};
use crate::types::{MergeRequestSpec, Repository};
use std::fmt;

/// Description used when none is given
pub const DEFAULT_CONTENT: &str = " ";

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOptions {
    /// Branch being merged
    pub source_branch: String,
    /// Branches to merge into, in submission order
    pub destinations: Vec<String>,
    /// Merge request title
    pub title: String,
    /// Merge request description
    pub content: String,
}

/// Ordered create-calls for one repository
#[derive(Debug, Clone)]
pub struct SubmissionPlan {
    /// Repository the requests are opened in
    pub repository: Repository,
    /// One spec per destination branch, same order as the options
    pub requests: Vec<MergeRequestSpec>,
}

impl SubmissionPlan {
    /// Number of merge requests to create
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Whether there is nothing to create
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

impl fmt::Display for SubmissionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} merge request(s) in {} (#{})",
            self.requests.len(),
            self.repository.name,
            self.repository.id
        )
    }
}

/// Split a comma-separated destination list
///
/// Whitespace around each name is trimmed and empty entries are dropped.
/// An empty result is an error.
pub fn parse_destinations(input: &str) -> Result<Vec<String>> {
    let destinations: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect();

    if destinations.is_empty() {
        return Err(Error::InvalidArgument(
            "at least one destination branch is required (-d dev,staging)".to_string(),
        ));
    }
    Ok(destinations)
}

/// Build one spec per destination (PURE)
pub fn create_submission_plan(
    repository: &Repository,
    options: &SubmissionOptions,
) -> Result<SubmissionPlan> {
    if options.destinations.is_empty() {
        return Err(Error::InvalidArgument(
            "no destination branches given".to_string(),
        ));
    }
    if let Some(dest) = options
        .destinations
        .iter()
        .find(|d| **d == options.source_branch)
    {
        return Err(Error::InvalidArgument(format!(
            "source and destination branch are both '{dest}'"
        )));
    }

    let requests = options
        .destinations
        .iter()
        .map(|destination| {
            MergeRequestSpec::new(
                repository.id,
                &options.title,
                &options.content,
                &options.source_branch,
                destination,
            )
        })
        .collect();

    Ok(SubmissionPlan {
        repository: repository.clone(),
        requests,
    })
}
