//! CLI command implementations

pub mod context;
pub mod style;
mod submit;

pub use submit::{SubmitOptions, run_submit};

use anstream::{eprintln, println};
use async_trait::async_trait;
use coding_mr::config::{TOKEN_KEY, WEBHOOK_KEY};
use coding_mr::error::Error;
use coding_mr::submit::ProgressCallback;
use coding_mr::types::{MergeRequestInfo, MergeRequestSpec};
use style::{Stylize, arrow, check, cross, hyperlink};

/// Prints one block per merge request as it is created
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_request_started(&self, spec: &MergeRequestSpec) {
        println!(
            "{} {} {} {}",
            "Opening".muted(),
            spec.source_branch.accent(),
            arrow(),
            spec.destination_branch.accent()
        );
    }

    async fn on_request_created(&self, info: &MergeRequestInfo) {
        println!(
            "{} Opened merge request {} ({} ⇒ {})",
            check(),
            format!("#{}", info.request_id).emphasis(),
            info.source_branch,
            info.target_branch
        );
        println!("  {} {}", "status:".muted(), info.status);
        println!(
            "  {} {}",
            "details:".muted(),
            hyperlink(&info.request_url, &info.request_url).success()
        );
    }

    async fn on_error(&self, spec: &MergeRequestSpec, error: &Error) {
        eprintln!(
            "{} Could not open {} {} {}: {error}",
            cross(),
            spec.source_branch,
            arrow(),
            spec.destination_branch
        );
    }
}

/// Print a fatal error, with setup help where the user can fix it
pub fn report_error(error: &Error) {
    eprintln!("{} {}", "error:".error(), error);

    match error {
        Error::ConfigMissing { key } => print_setup_help(key),
        Error::UnsupportedRemote(_) => {
            eprintln!(
                "  {}",
                "Only repositories cloned over HTTPS from e.coding.net are supported.".muted()
            );
        }
        Error::RepositoryNotFound(_) => {
            eprintln!(
                "  {}",
                "Check that your token can access this repository and that the remote URL \
                 matches its HTTPS clone URL."
                    .muted()
            );
        }
        _ => {}
    }
}

fn print_setup_help(key: &str) {
    let (what, placeholder, docs) = match key {
        TOKEN_KEY => (
            "CODING personal access token",
            "<your token>",
            Some("https://coding.net/help/docs/member/tokens.html"),
        ),
        WEBHOOK_KEY => ("chat webhook URL", "<webhook url>", None),
        _ => ("value", "<value>", None),
    };

    eprintln!();
    eprintln!("  {} {what}, e.g.", "Set your".muted());
    eprintln!();
    eprintln!("    {}", format!("git config --global {key} {placeholder}").warn());
    if let Some(docs) = docs {
        eprintln!();
        eprintln!("  {} {}", "How to create a token:".muted(), docs.accent());
    }
}
