//! Chat webhook notification
//!
//! Formats the created merge requests as chat markdown and posts them to a
//! webhook using the `{"msgtype": "markdown", ...}` envelope.

use crate::error::Result;
use crate::types::{MergeRequestInfo, Repository};
use reqwest::Client;
use serde::Serialize;
use std::fmt::Write as _;
use std::time::Duration;
use tracing::debug;

#[derive(Serialize)]
struct WebhookPayload<'a> {
    msgtype: &'static str,
    markdown: MarkdownBody<'a>,
}

#[derive(Serialize)]
struct MarkdownBody<'a> {
    content: &'a str,
}

/// Build the markdown summary for one run
///
/// Author and repository are named once in the header; every merge request
/// gets its own block with branches, title and a detail link.
pub fn format_summary(repository: &Repository, infos: &[MergeRequestInfo]) -> String {
    let mut content = String::from("## Merge request\n");

    match infos.first() {
        Some(first) => {
            let _ = write!(
                content,
                "\t`{}` opened merge requests in `{}`",
                first.author_name, repository.name
            );
        }
        None => {
            let _ = write!(
                content,
                "\tNo merge requests were opened in `{}`",
                repository.name
            );
        }
    }

    for info in infos {
        let _ = write!(
            content,
            "\n\tfrom `{}` into `{}`\n### Changes\n\t{} [details]({})",
            info.source_branch, info.target_branch, info.title, info.request_url
        );
    }

    content
}

const fn webhook_payload(markdown: &str) -> WebhookPayload<'_> {
    WebhookPayload {
        msgtype: "markdown",
        markdown: MarkdownBody { content: markdown },
    }
}

/// Posts markdown messages to a chat webhook
pub struct WebhookNotifier {
    client: Client,
    url: String,
}

impl WebhookNotifier {
    /// Create a notifier for `url`
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Post one markdown message
    ///
    /// The response body is not decoded; only transport failure and
    /// non-success status codes are errors.
    pub async fn post(&self, markdown: &str) -> Result<()> {
        debug!(bytes = markdown.len(), "posting webhook message");

        self.client
            .post(&self.url)
            .json(&webhook_payload(markdown))
            .send()
            .await?
            .error_for_status()?;

        debug!("webhook message delivered");
        Ok(())
    }
}
