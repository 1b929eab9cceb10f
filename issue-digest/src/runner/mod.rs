//! Orchestrates a fetch, render and write run.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::config::load_config;
use crate::fetcher::IssueFetcher;
use crate::github::{build_client, GitHubApi};
use crate::labels::{collect_labels, RepositoryLabels};
use crate::markdown::{render_reports, write_reports, ReportFile};
use crate::summary::RunSummary;
use chrono::Utc;
use octocrab::Octocrab;
use tracing::{info, warn};

/// Runs the issue digest against a GitHub client.
pub struct Runner<C = Octocrab> {
    config: RunnerConfig,
    client: C,
}

impl Runner<Octocrab> {
    /// Builds a runner with an octocrab client from the provided configuration.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let client = build_client(config.token())?;
        Ok(Self { config, client })
    }
}

impl<C: GitHubApi + Sync> Runner<C> {
    /// Builds a runner around an existing client.
    pub fn with_client(config: RunnerConfig, client: C) -> Self {
        Self { config, client }
    }

    /// Executes the full flow: load, fetch, render, write.
    ///
    /// Failed chunks and malformed repository URLs are logged and counted in
    /// the summary; only configuration, rendering and file-system errors
    /// abort the run.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new(self.config.dry_run());
        let config = load_config(self.config.config_path())?;
        summary.repositories_configured = config.repositories.values().map(Vec::len).sum();

        let mut fetcher = IssueFetcher::new(&self.client, self.config.fetch_options());
        let report = fetcher.fetch_all(&config).await;
        summary.record_fetch(&report);

        for failure in &report.failures {
            warn!(
                category = %failure.category,
                chunk = failure.chunk,
                repositories = failure.repositories.len(),
                error = %failure.error,
                "Chunk omitted from report"
            );
        }

        for truncated in &report.truncated {
            warn!(
                category = %truncated.category,
                chunk = truncated.chunk,
                collected = truncated.collected,
                "Chunk stopped at the search result limit"
            );
        }

        let files = render_reports(&config, &report.issues, Utc::now())?;

        if self.config.dry_run() {
            print_dry_run_preview(&config.destination, &files);
            return Ok(summary);
        }

        summary.files_written = write_reports(&config.destination, &files)?;
        info!(files = summary.files_written, "Run complete");
        Ok(summary)
    }

    /// Lists the labels of every configured repository.
    pub async fn list_labels(&self) -> Result<Vec<RepositoryLabels>, RunnerError> {
        let config = load_config(self.config.config_path())?;
        Ok(collect_labels(&self.client, &config).await)
    }
}

fn print_dry_run_preview(destination: &std::path::Path, files: &[ReportFile]) {
    println!("\n[DRY RUN] Would write {} files:", files.len());
    for file in files {
        println!(
            "  {} ({} lines)",
            destination.join(&file.relative_path).display(),
            file.content.lines().count()
        );
    }
    println!();
}
