//! Core types for coding-mr

use serde::{Deserialize, Serialize};
use std::fmt;

/// Action tag for the create-merge-request call
pub const CREATE_MERGE_REQUEST_ACTION: &str = "CreateGitMergeReq";

/// A hosted CODING repository ("depot")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Repository {
    /// Depot id, used as `DepotId` in merge requests
    pub id: u64,
    /// HTTPS clone URL, compared against the local remote
    pub https_url: String,
    /// Display name
    pub name: String,
}

/// Body of one create-merge-request call
///
/// Serialized as-is; the field names match the open API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeRequestSpec {
    /// Always [`CREATE_MERGE_REQUEST_ACTION`]
    #[serde(rename = "Action")]
    pub action: &'static str,
    /// Depot id of the resolved repository
    #[serde(rename = "DepotId")]
    pub repository_id: u64,
    /// Merge request title
    #[serde(rename = "Title")]
    pub title: String,
    /// Merge request description
    #[serde(rename = "Content")]
    pub content: String,
    /// Branch being merged
    #[serde(rename = "SrcBranch")]
    pub source_branch: String,
    /// Branch being merged into
    #[serde(rename = "DestBranch")]
    pub destination_branch: String,
}

impl MergeRequestSpec {
    /// Build a spec for one destination branch
    pub fn new(
        repository_id: u64,
        title: &str,
        content: &str,
        source_branch: &str,
        destination_branch: &str,
    ) -> Self {
        Self {
            action: CREATE_MERGE_REQUEST_ACTION,
            repository_id,
            title: title.to_string(),
            content: content.to_string(),
            source_branch: source_branch.to_string(),
            destination_branch: destination_branch.to_string(),
        }
    }
}

/// A merge request as returned by the create call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequestInfo {
    /// Merge request id
    pub request_id: u64,
    /// Web URL of the merge request
    pub request_url: String,
    /// Status snapshot taken at creation time
    pub status: MergeStatus,
    /// Author display name
    pub author_name: String,
    /// Branch being merged into
    pub target_branch: String,
    /// Branch being merged
    pub source_branch: String,
    /// Merge request title
    pub title: String,
}

/// Merge request status reported by CODING
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeStatus {
    /// Can be merged automatically
    CanMerge,
    /// Accepted
    Accepted,
    /// Cannot be merged automatically
    CannotMerge,
    /// Refused (closed)
    Refused,
    /// Cancelled
    Cancel,
    /// Merge in progress
    Merging,
    /// Abnormal state
    Abnormal,
    /// Waiting for review
    ReviewWaiting,
    /// Any code this tool doesn't know, kept verbatim
    Unknown(String),
}

impl MergeStatus {
    /// Parse a platform status code. Never fails.
    pub fn from_code(code: &str) -> Self {
        match code {
            "CANMERGE" => Self::CanMerge,
            "ACCEPTED" => Self::Accepted,
            "CANNOTMERGE" => Self::CannotMerge,
            "REFUSED" => Self::Refused,
            "CANCEL" => Self::Cancel,
            "MERGING" => Self::Merging,
            "ABNORMAL" => Self::Abnormal,
            "REVIEW_WAITING" => Self::ReviewWaiting,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The platform code this status was parsed from
    pub fn code(&self) -> &str {
        match self {
            Self::CanMerge => "CANMERGE",
            Self::Accepted => "ACCEPTED",
            Self::CannotMerge => "CANNOTMERGE",
            Self::Refused => "REFUSED",
            Self::Cancel => "CANCEL",
            Self::Merging => "MERGING",
            Self::Abnormal => "ABNORMAL",
            Self::ReviewWaiting => "REVIEW_WAITING",
            Self::Unknown(code) => code,
        }
    }

    /// Human-readable description
    pub fn description(&self) -> String {
        let text = match self {
            Self::CanMerge => "can be merged automatically",
            Self::Accepted => "accepted",
            Self::CannotMerge => "cannot be merged automatically",
            Self::Refused => "refused (closed)",
            Self::Cancel => "cancelled",
            Self::Merging => "merging",
            Self::Abnormal => "abnormal",
            Self::ReviewWaiting => "waiting for review",
            Self::Unknown(code) => return format!("unknown status: {code}"),
        };
        text.to_string()
    }
}

impl fmt::Display for MergeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// Translate a raw status code into its description
pub fn describe_status(code: &str) -> String {
    MergeStatus::from_code(code).description()
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: [(&str, &str); 8] = [
        ("CANMERGE", "can be merged automatically"),
        ("ACCEPTED", "accepted"),
        ("CANNOTMERGE", "cannot be merged automatically"),
        ("REFUSED", "refused (closed)"),
        ("CANCEL", "cancelled"),
        ("MERGING", "merging"),
        ("ABNORMAL", "abnormal"),
        ("REVIEW_WAITING", "waiting for review"),
    ];

    #[test]
    fn test_known_status_codes_have_fixed_descriptions() {
        for (code, description) in KNOWN {
            let status = MergeStatus::from_code(code);
            assert!(!matches!(status, MergeStatus::Unknown(_)), "{code}");
            assert_eq!(status.description(), description);
            assert_eq!(status.code(), code);
        }
    }

    #[test]
    fn test_unknown_status_preserved_verbatim() {
        assert_eq!(describe_status("SOMETHING_NEW"), "unknown status: SOMETHING_NEW");
        assert_eq!(describe_status("canmerge"), "unknown status: canmerge");
        assert_eq!(describe_status(""), "unknown status: ");
        assert_eq!(MergeStatus::from_code("X y").code(), "X y");
    }

    #[test]
    fn test_spec_serializes_with_api_field_names() {
        let spec = MergeRequestSpec::new(42, "fix bug", " ", "feature", "dev");
        let json = serde_json::to_value(&spec).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "Action": "CreateGitMergeReq",
                "DepotId": 42,
                "Title": "fix bug",
                "Content": " ",
                "SrcBranch": "feature",
                "DestBranch": "dev",
            })
        );
    }

    #[test]
    fn test_repository_deserializes_from_depot() {
        let repo: Repository = serde_json::from_str(
            r#"{"Id": 7, "HttpsUrl": "https://e.coding.net/acme/widget.git", "Name": "widget", "Extra": true}"#,
        )
        .unwrap();
        assert_eq!(repo.id, 7);
        assert_eq!(repo.https_url, "https://e.coding.net/acme/widget.git");
        assert_eq!(repo.name, "widget");
    }
}
