//! Run-scoped cache of fetched issues.

use crate::config::{parse_repository_url, RepositoryId};
use crate::github::Issue;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Cache key: lower-cased `owner/name` plus the label clause that produced
/// the entry, so results for one label set never answer another.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    repository: String,
    labels: String,
}

impl CacheKey {
    fn new(repository: &RepositoryId, labels: &str) -> Self {
        Self {
            repository: repository.full_name().to_lowercase(),
            labels: labels.to_string(),
        }
    }
}

/// Issues already fetched during the current run, per repository.
///
/// Lives exactly as long as the fetcher that owns it; nothing is persisted.
#[derive(Debug, Default)]
pub struct IssueCache {
    entries: HashMap<CacheKey, Vec<Issue>>,
}

impl IssueCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached issues of a repository, if it was fetched already.
    #[must_use]
    pub fn get(&self, repository: &RepositoryId, labels: &str) -> Option<&[Issue]> {
        self.entries
            .get(&CacheKey::new(repository, labels))
            .map(Vec::as_slice)
    }

    /// Splits a chunk into cached issues and repositories that still need a fetch.
    pub fn partition(
        &self,
        chunk: &[RepositoryId],
        labels: &str,
    ) -> (Vec<Issue>, Vec<RepositoryId>) {
        let mut cached = Vec::new();
        let mut to_fetch = Vec::new();

        for repository in chunk {
            match self.get(repository, labels) {
                Some(issues) => {
                    debug!(repo = %repository, count = issues.len(), "Cache hit");
                    cached.extend_from_slice(issues);
                }
                None => to_fetch.push(repository.clone()),
            }
        }

        (cached, to_fetch)
    }

    /// Records the outcome of a successful query.
    ///
    /// Every queried repository gets an entry, including those without
    /// matching issues. Issues are filed under the repository parsed from
    /// their (already rewritten) repository URL.
    pub fn store(&mut self, queried: &[RepositoryId], issues: &[Issue], labels: &str) {
        for repository in queried {
            self.entries
                .entry(CacheKey::new(repository, labels))
                .or_default();
        }

        for issue in issues {
            match parse_repository_url(&issue.repository_url) {
                Ok(repository) => self
                    .entries
                    .entry(CacheKey::new(&repository, labels))
                    .or_default()
                    .push(issue.clone()),
                Err(e) => {
                    warn!(url = %issue.url, error = %e, "Issue not cached, repository unknown");
                }
            }
        }
    }

    /// Number of cached repositories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
