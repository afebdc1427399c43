//! pinaudit - pinned requirements auditor CLI tool
//!
//! Clones the marketplace apps repository, finds every requirements.txt and
//! compares each exact pin with the latest version on PyPI, or prints the
//! manifests re-pinned to those latest versions.

use clap::Parser;
use pinaudit::checkout::{SystemGit, REPO_URL};
use pinaudit::cli::CliArgs;
use pinaudit::error::AppError;
use pinaudit::orchestrator::{AuditConfig, AuditOutcome, Auditor};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Exit code reported when the run is interrupted with Ctrl-C
const INTERRUPTED: u8 = 130;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging();

    // Dropping the run future on Ctrl-C drops the checkout with it
    tokio::select! {
        result = run(args) => match result {
            Ok(exit_code) => exit_code,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                ExitCode::FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => {
            eprintln!("Interrupted");
            ExitCode::from(INTERRUPTED)
        }
    }
}

/// Route warnings, such as failed lookups, to stderr
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .with_ansi(io::stderr().is_terminal())
        .try_init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    audit(&args).await?;
    Ok(ExitCode::SUCCESS)
}

async fn audit(args: &CliArgs) -> Result<AuditOutcome, AppError> {
    let config = AuditConfig::from_cli(args)
        .with_color(io::stdout().is_terminal())
        .with_progress(true);
    let auditor = Auditor::for_pypi(config)?;

    let mut stdout = io::stdout().lock();
    auditor
        .audit_repository(&SystemGit::new(), REPO_URL, &mut stdout)
        .await
}
