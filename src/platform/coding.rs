//! CODING open API service implementation

use crate::error::{Error, Result};
use crate::platform::CodingPlatform;
use crate::types::{MergeRequestInfo, MergeRequestSpec, MergeStatus, Repository};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Action tag for listing the caller's repositories
const LIST_REPOSITORIES_ACTION: &str = "DescribeMyDepots";

/// CODING open API client using reqwest
pub struct CodingService {
    client: Client,
    token: String,
    api_base: String,
}

/// `{"Response": {...}}` wrapper around every reply
#[derive(Deserialize)]
struct Envelope<T> {
    #[serde(rename = "Response")]
    response: ResponseBody<T>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ResponseBody<T> {
    #[serde(flatten)]
    payload: T,
    #[serde(default)]
    request_id: String,
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ApiErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

impl<T> ResponseBody<T> {
    /// The error member wins over whatever payload came along
    fn into_payload(self) -> Result<T> {
        match self.error {
            Some(err) => Err(Error::Api {
                code: err.code,
                message: err.message,
                request_id: self.request_id,
            }),
            None => Ok(self.payload),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DepotsResponse {
    #[serde(default)]
    payload: Option<DepotsPayload>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DepotsPayload {
    #[serde(default)]
    depots: Vec<Repository>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MergeResponse {
    #[serde(default)]
    merge_info: Option<MergeInfo>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MergeInfo {
    merge_request_id: u64,
    merge_request_url: String,
    merge_request_info: MergeRequestDetails,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MergeRequestDetails {
    status: String,
    author: Author,
    target_branch: String,
    source_branch: String,
    title: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Author {
    name: String,
}

impl From<MergeInfo> for MergeRequestInfo {
    fn from(info: MergeInfo) -> Self {
        let details = info.merge_request_info;
        Self {
            request_id: info.merge_request_id,
            request_url: info.merge_request_url,
            status: MergeStatus::from_code(&details.status),
            author_name: details.author.name,
            target_branch: details.target_branch,
            source_branch: details.source_branch,
            title: details.title,
        }
    }
}

#[derive(Serialize)]
struct ActionRequest {
    #[serde(rename = "Action")]
    action: &'static str,
}

impl CodingService {
    /// Create a new CODING service posting to `api_base`
    pub fn new(
        api_base: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("coding-mr/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            token: token.into(),
            api_base: api_base.into(),
        })
    }

    /// Endpoint every action is posted to
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// POST an action body and unwrap the response envelope
    async fn call<B, T>(&self, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(&self.api_base)
            .header("Authorization", format!("token {}", self.token))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        let envelope: Envelope<T> = serde_json::from_str(&text).map_err(|e| {
            if status.is_success() {
                Error::Decode(format!("{e}: {text}"))
            } else {
                Error::Decode(format!("HTTP {status}: {text}"))
            }
        })?;

        let request_id = envelope.response.request_id.clone();
        let payload = envelope.response.into_payload()?;
        debug!(%request_id, "CODING call succeeded");
        Ok(payload)
    }
}

#[async_trait]
impl CodingPlatform for CodingService {
    async fn list_my_repositories(&self) -> Result<Vec<Repository>> {
        debug!(api_base = %self.api_base, "listing repositories");
        let body = ActionRequest {
            action: LIST_REPOSITORIES_ACTION,
        };

        let response: DepotsResponse = self.call(&body).await.inspect_err(|e| {
            if let Error::Api { message, .. } = e {
                warn!(error = %message, "CODING refused to list repositories");
            }
        })?;

        let repositories = response.payload.map(|p| p.depots).unwrap_or_default();
        debug!(count = repositories.len(), "listed repositories");
        Ok(repositories)
    }

    async fn create_merge_request(&self, spec: &MergeRequestSpec) -> Result<MergeRequestInfo> {
        debug!(
            source = %spec.source_branch,
            destination = %spec.destination_branch,
            body = %serde_json::to_string(spec).unwrap_or_default(),
            "creating merge request"
        );

        let response: MergeResponse = self.call(spec).await?;
        let info: MergeRequestInfo = response
            .merge_info
            .ok_or_else(|| Error::Decode("response has no MergeInfo".to_string()))?
            .into();

        debug!(
            request_id = info.request_id,
            status = info.status.code(),
            "created merge request"
        );
        Ok(info)
    }
}
