//! Fetch results, including everything that went wrong along the way.

use crate::config::{RepositoryId, RepositoryUrlError};
use crate::github::Issue;
use std::collections::BTreeMap;

/// Category name mapped to its sorted issues. Iterates in category order.
pub type IssueMap = BTreeMap<String, Vec<Issue>>;

/// A chunk whose search failed; its fetched issues were discarded.
#[derive(Debug, Clone)]
pub struct ChunkFailure {
    /// Category the chunk belongs to.
    pub category: String,

    /// Zero-based chunk index within the category.
    pub chunk: usize,

    /// Repositories that were part of the failed query.
    pub repositories: Vec<RepositoryId>,

    /// Error message.
    pub error: String,
}

/// A chunk whose search hit the result cap; later results were not fetched.
#[derive(Debug, Clone)]
pub struct TruncatedChunk {
    /// Category the chunk belongs to.
    pub category: String,

    /// Zero-based chunk index within the category.
    pub chunk: usize,

    /// Repositories that were part of the query.
    pub repositories: Vec<RepositoryId>,

    /// Issues kept before the search stopped.
    pub collected: usize,
}

/// A configured repository URL that could not be parsed.
#[derive(Debug, Clone)]
pub struct SkippedRepository {
    /// Category the entry belongs to.
    pub category: String,

    /// The offending URL.
    pub url: String,

    /// Why it was rejected.
    pub error: RepositoryUrlError,
}

/// Outcome of a full fetch run.
#[derive(Debug, Clone, Default)]
pub struct FetchReport {
    /// Issues per category. Every configured category has an entry.
    pub issues: IssueMap,

    /// Chunks whose query failed.
    pub failures: Vec<ChunkFailure>,

    /// Chunks whose search stopped at the result cap.
    pub truncated: Vec<TruncatedChunk>,

    /// Repository entries skipped because their URL was malformed.
    pub skipped: Vec<SkippedRepository>,

    /// Search requests sent, one per page.
    pub requests: usize,

    /// Repository lookups answered by the cache.
    pub cache_hits: usize,
}

impl FetchReport {
    /// Returns true if no chunk failed or was truncated and no entry was skipped.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.truncated.is_empty() && self.skipped.is_empty()
    }

    /// Total number of issues across all categories.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.issues.values().map(Vec::len).sum()
    }
}
