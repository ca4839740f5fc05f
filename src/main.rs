//! cmr - open CODING merge requests from the command line

mod cli;

use clap::{ArgAction, Parser};
use cli::{SubmitOptions, report_error, run_submit};
use coding_mr::submit::DEFAULT_CONTENT;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Open CODING merge requests for one or more branches and announce them to your team
#[derive(Parser, Debug)]
#[command(name = "cmr", version, about)]
struct Cli {
    /// Branch to merge (defaults to the current branch)
    #[arg(short = 's', long = "source")]
    source: Option<String>,

    /// Branches to merge into, comma separated (e.g. dev,staging)
    #[arg(short = 'd', long = "dest", required = true)]
    destinations: String,

    /// Merge request title
    #[arg(short = 't', long)]
    title: String,

    /// Merge request description
    #[arg(short = 'c', long, default_value = DEFAULT_CONTENT)]
    content: String,

    /// Remote whose URL identifies the repository [default: origin]
    #[arg(long)]
    remote: Option<String>,

    /// Path inside the git repository
    #[arg(long, default_value = ".")]
    path: PathBuf,

    /// Show what would be opened without creating anything
    #[arg(long)]
    dry_run: bool,

    /// Preview the merge requests and ask before opening them
    #[arg(long, conflicts_with = "dry_run")]
    confirm: bool,

    /// Don't post the summary to the chat webhook
    #[arg(long)]
    no_notify: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "coding_mr=info,cmr=info",
        2 => "coding_mr=debug,cmr=debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = SubmitOptions {
        path: cli.path,
        source: cli.source,
        destinations: cli.destinations,
        title: cli.title,
        content: cli.content,
        remote: cli.remote,
        dry_run: cli.dry_run,
        confirm: cli.confirm,
        no_notify: cli.no_notify,
    };

    match run_submit(options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}
