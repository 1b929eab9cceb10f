//! CLI for issue-digest.
//!
//! Collects open, labelled issues from the configured repositories and
//! writes them into per-category Markdown reports.

use clap::{Parser, Subcommand};
use issue_digest::{
    FetchOptions, RepositoryLabels, RunSummary, Runner, RunnerConfig, RunnerError,
    DEFAULT_CHUNK_SIZE,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Issue Digest - Collect labelled issues across repositories into Markdown reports.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the YAML (or TOML) configuration file.
    #[arg(long, env = "INPUT_CONFIG_FILE")]
    config: Option<PathBuf>,

    /// GitHub Personal Access Token. Without one, requests are unauthenticated.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Preview the reports without writing them.
    #[arg(long)]
    dry_run: bool,

    /// Repositories combined into one search query.
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Query every repository reference, even if fetched earlier in the run.
    #[arg(long)]
    no_cache: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the labels used by every configured repository.
    Labels,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let mut args = Args::parse();

    let outcome = match args.command.take() {
        Some(Command::Labels) => list_labels(args).await.map(|labels| print_labels(&labels)),
        None => run(args).await.map(|summary| print_summary(&summary)),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

fn runner_config(args: Args) -> Result<RunnerConfig, RunnerError> {
    let config_path = args.config.ok_or(RunnerError::MissingConfigPath)?;
    let fetch_options = FetchOptions {
        chunk_size: args.chunk_size,
        use_cache: !args.no_cache,
    };
    Ok(RunnerConfig::new(config_path, args.token, args.dry_run).with_fetch_options(fetch_options))
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let runner = Runner::new(runner_config(args)?)?;
    runner.run().await
}

async fn list_labels(args: Args) -> Result<Vec<RepositoryLabels>, RunnerError> {
    let runner = Runner::new(runner_config(args)?)?;
    runner.list_labels().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Categories: {}", summary.categories);
    println!(
        "  Repositories configured: {}",
        summary.repositories_configured
    );
    println!("  Repositories skipped: {}", summary.repositories_skipped);
    println!("  Issues found: {}", summary.issues_found);
    println!("  Search requests: {}", summary.requests);
    println!("  Cache hits: {}", summary.cache_hits);
    println!("  Failed chunks: {}", summary.chunks_failed);
    println!("  Truncated chunks: {}", summary.chunks_truncated);

    if !summary.dry_run {
        println!("  Files written: {}", summary.files_written);
    }
}

/// Prints labels grouped by category.
fn print_labels(results: &[RepositoryLabels]) {
    let mut current_category: Option<&str> = None;

    for result in results {
        if current_category != Some(result.category.as_str()) {
            println!("\n=== Category: {} ===", result.category);
            current_category = Some(&result.category);
        }

        println!("\nRepository: {}", result.repository);
        match &result.labels {
            Ok(labels) => {
                println!("Labels:");
                for label in labels {
                    println!("  - {label}");
                }
            }
            Err(e) => println!("  Failed to list labels: {e}"),
        }
    }
}
