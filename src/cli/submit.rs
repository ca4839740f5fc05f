//! Submit command - open merge requests and announce them

use crate::cli::CliProgress;
use crate::cli::context::CommandContext;
use crate::cli::style::{CHECK, Stylize, arrow, check, spinner_style};
use anstream::println;
use coding_mr::error::{Error, Result};
use coding_mr::notify::{WebhookNotifier, format_summary};
use coding_mr::platform::resolve_repository;
use coding_mr::submit::{
    SubmissionOptions, SubmissionPlan, create_submission_plan, execute_submission,
    parse_destinations,
};
use dialoguer::Confirm;
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::Duration;

/// Options for the submit command
#[derive(Debug, Clone, Default)]
pub struct SubmitOptions {
    /// Working directory inside the repository
    pub path: PathBuf,
    /// Source branch; the current branch when `None`
    pub source: Option<String>,
    /// Comma-separated destination branches
    pub destinations: String,
    /// Merge request title
    pub title: String,
    /// Merge request description
    pub content: String,
    /// Remote name override
    pub remote: Option<String>,
    /// Show the plan without creating anything
    pub dry_run: bool,
    /// Preview the plan and prompt before creating
    pub confirm: bool,
    /// Skip the webhook notification
    pub no_notify: bool,
}

/// Run the submit command
pub async fn run_submit(options: SubmitOptions) -> Result<()> {
    // Argument problems are reported before touching git or the network
    let destinations = parse_destinations(&options.destinations)?;

    let ctx = CommandContext::new(
        &options.path,
        options.source.as_deref(),
        options.remote.as_deref(),
    )?;

    // A notifying run needs the webhook before anything is created
    let notify = !options.dry_run && !options.no_notify;
    if notify {
        ctx.config.require_webhook_url()?;
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(spinner_style());
    spinner.set_message(format!(
        "Looking up {} in team {}...",
        ctx.remote_url.accent(),
        ctx.api_base.team.emphasis()
    ));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let repository = match resolve_repository(&ctx.platform, &ctx.remote_url).await {
        Ok(repository) => repository,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e);
        }
    };
    spinner.finish_with_message(format!(
        "{} Found {} (#{})",
        check(),
        repository.name.emphasis(),
        repository.id
    ));

    let submission = SubmissionOptions {
        source_branch: ctx.source_branch.clone(),
        destinations,
        title: options.title,
        content: options.content,
    };
    let plan = create_submission_plan(&repository, &submission)?;

    if options.dry_run {
        print_plan(&plan, &ctx);
        println!("{}", "Dry run complete".muted());
        return Ok(());
    }

    if options.confirm {
        print_plan(&plan, &ctx);
        if !Confirm::new()
            .with_prompt("Open these merge requests?")
            .default(true)
            .interact()
            .map_err(|e| Error::Internal(format!("Failed to read confirmation: {e}")))?
        {
            println!("{}", "Aborted".muted());
            return Ok(());
        }
        println!();
    }

    let result = execute_submission(&plan, &ctx.platform, &CliProgress).await;
    if !result.is_success() {
        if !result.created.is_empty() {
            println!(
                "{}",
                format!(
                    "{} merge request(s) were opened before the failure; no notification sent.",
                    result.created.len()
                )
                .warn()
            );
        }
        return result.into_result().map(|_| ());
    }
    let created = result.into_result()?;

    println!();
    println!(
        "{} {} merge request(s) opened in {}",
        format!("{CHECK} Done:").success(),
        created.len().accent(),
        repository.name.emphasis()
    );

    if !notify {
        return Ok(());
    }

    let summary = format_summary(&repository, &created);
    let webhook_url = ctx.config.require_webhook_url()?;
    let notifier = WebhookNotifier::new(webhook_url, ctx.config.timeout)?;
    match notifier.post(&summary).await {
        Ok(()) => println!("{} {}", check(), "Team notified".muted()),
        Err(e) => {
            // The merge requests exist regardless of the notification
            println!(
                "{}",
                "The merge requests above were created; only the notification failed.".warn()
            );
            return Err(e);
        }
    }

    Ok(())
}

fn print_plan(plan: &SubmissionPlan, ctx: &CommandContext) {
    println!("{}:", "Submission plan".emphasis());
    println!(
        "  {} {}",
        "workspace:".muted(),
        ctx.workspace.root().display()
    );
    println!("  {} {}", "repository:".muted(), plan);
    println!();
    for spec in &plan.requests {
        println!(
            "    {} {} {} {}  {}",
            arrow(),
            spec.source_branch.accent(),
            arrow(),
            spec.destination_branch.accent(),
            spec.title.muted()
        );
    }
    println!();
}
