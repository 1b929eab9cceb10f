//! Run summary types.

use crate::fetcher::FetchReport;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of categories reported.
    pub categories: usize,

    /// Number of repository entries in the configuration.
    pub repositories_configured: usize,

    /// Number of repository entries skipped because of malformed URLs.
    pub repositories_skipped: usize,

    /// Number of issues collected across all categories.
    pub issues_found: usize,

    /// Number of chunks whose search failed.
    pub chunks_failed: usize,

    /// Number of chunks whose search stopped at the result cap.
    pub chunks_truncated: usize,

    /// Number of search requests sent.
    pub requests: usize,

    /// Number of repository lookups answered by the cache.
    pub cache_hits: usize,

    /// Number of files written.
    pub files_written: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with the outcome of a fetch.
    pub fn record_fetch(&mut self, report: &FetchReport) {
        self.categories = report.issues.len();
        self.repositories_skipped = report.skipped.len();
        self.issues_found = report.issue_count();
        self.chunks_failed = report.failures.len();
        self.chunks_truncated = report.truncated.len();
        self.requests = report.requests;
        self.cache_hits = report.cache_hits;
    }

    /// Returns true if any repository was skipped or any chunk failed or was truncated.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.chunks_failed > 0 || self.chunks_truncated > 0 || self.repositories_skipped > 0
    }
}
