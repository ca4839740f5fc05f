//! Mock platform service for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use coding_mr::error::{Error, Result};
use coding_mr::platform::CodingPlatform;
use coding_mr::types::{MergeRequestInfo, MergeRequestSpec, MergeStatus, Repository};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Simple mock CODING platform
///
/// Features:
/// - Auto-incrementing merge request ids
/// - Call tracking for verification
/// - Error injection per destination branch
pub struct MockCodingPlatform {
    author: String,
    repositories: Mutex<Vec<Repository>>,
    next_request_id: AtomicU64,
    // Call tracking
    list_calls: AtomicU64,
    create_calls: Mutex<Vec<MergeRequestSpec>>,
    // Error injection
    error_on_list: Mutex<Option<(String, String)>>,
    error_on_branch: Mutex<Option<(String, String, String)>>,
    status_code: Mutex<String>,
}

impl MockCodingPlatform {
    /// Create a mock whose merge requests are authored by `author`
    pub fn new(author: &str) -> Self {
        Self {
            author: author.to_string(),
            repositories: Mutex::new(Vec::new()),
            next_request_id: AtomicU64::new(1),
            list_calls: AtomicU64::new(0),
            create_calls: Mutex::new(Vec::new()),
            error_on_list: Mutex::new(None),
            error_on_branch: Mutex::new(None),
            status_code: Mutex::new("CANMERGE".to_string()),
        }
    }

    /// Repositories returned by `list_my_repositories`
    pub fn with_repositories(self, repositories: Vec<Repository>) -> Self {
        *self.repositories.lock().unwrap() = repositories;
        self
    }

    /// Status code reported for created merge requests
    pub fn set_status(&self, code: &str) {
        *self.status_code.lock().unwrap() = code.to_string();
    }

    /// Make `list_my_repositories` fail with an API error
    pub fn fail_list(&self, code: &str, message: &str) {
        *self.error_on_list.lock().unwrap() = Some((code.to_string(), message.to_string()));
    }

    /// Make the create-call for `destination` fail with an API error
    pub fn fail_on_branch(&self, destination: &str, code: &str, message: &str) {
        *self.error_on_branch.lock().unwrap() = Some((
            destination.to_string(),
            code.to_string(),
            message.to_string(),
        ));
    }

    /// Number of list calls made
    pub fn list_call_count(&self) -> u64 {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Every create-call made, in order
    pub fn create_calls(&self) -> Vec<MergeRequestSpec> {
        self.create_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CodingPlatform for MockCodingPlatform {
    async fn list_my_repositories(&self) -> Result<Vec<Repository>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some((code, message)) = self.error_on_list.lock().unwrap().clone() {
            return Err(Error::Api {
                code,
                message,
                request_id: "mock".to_string(),
            });
        }
        Ok(self.repositories.lock().unwrap().clone())
    }

    async fn create_merge_request(&self, spec: &MergeRequestSpec) -> Result<MergeRequestInfo> {
        self.create_calls.lock().unwrap().push(spec.clone());

        if let Some((branch, code, message)) = self.error_on_branch.lock().unwrap().clone() {
            if branch == spec.destination_branch {
                return Err(Error::Api {
                    code,
                    message,
                    request_id: "mock".to_string(),
                });
            }
        }

        let id = self.next_request_id.fetch_add(1, Ordering::SeqCst);
        Ok(MergeRequestInfo {
            request_id: id,
            request_url: format!("https://acme.coding.net/mr/{id}"),
            status: MergeStatus::from_code(&self.status_code.lock().unwrap()),
            author_name: self.author.clone(),
            target_branch: spec.destination_branch.clone(),
            source_branch: spec.source_branch.clone(),
            title: spec.title.clone(),
        })
    }
}
