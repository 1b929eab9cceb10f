//! Issue fetching across many repositories.
//!
//! For every category the configured repositories are parsed, split into
//! chunks, and each chunk is turned into one paginated search query. Fetched
//! issues get browsable URLs, may be cached for the rest of the run, and are
//! finally sorted per category.

mod cache;
mod query;
mod report;
mod rewrite;
mod sort;

pub use cache::IssueCache;
pub use query::{build_label_clause, build_search_query, DEFAULT_CHUNK_SIZE};
pub use report::{ChunkFailure, FetchReport, IssueMap, SkippedRepository, TruncatedChunk};
pub use rewrite::{rewrite_api_url, to_browsable, API_URL_BASE, WEB_URL_BASE};
pub use sort::sort_issues;

use crate::config::{parse_repository_url, Config, RepositoryId};
use crate::github::{GitHubApi, GitHubError, Issue};
use query::dedupe_repositories;
use tracing::{debug, info, info_span, warn, Instrument};

/// Maximum results GitHub serves for a single search query.
pub const MAX_SEARCH_RESULTS: usize = 1000;

/// Every page of one search, and whether the result cap cut it short.
struct SearchOutcome {
    issues: Vec<Issue>,
    truncated: bool,
}

/// Tunables for a fetch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Repositories per search query.
    pub chunk_size: usize,

    /// Whether repositories fetched earlier in the run are served from memory.
    pub use_cache: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            use_cache: true,
        }
    }
}

/// Fetches labelled open issues for every configured category.
///
/// Construct one per run: the cache lives as long as the fetcher.
pub struct IssueFetcher<C> {
    client: C,
    options: FetchOptions,
    cache: Option<IssueCache>,
}

impl<C: GitHubApi> IssueFetcher<C> {
    /// Creates a fetcher over the given client.
    pub fn new(client: C, options: FetchOptions) -> Self {
        let cache = options.use_cache.then(IssueCache::new);
        Self {
            client,
            options,
            cache,
        }
    }

    /// Returns the run cache, if caching is enabled.
    #[must_use]
    pub fn cache(&self) -> Option<&IssueCache> {
        self.cache.as_ref()
    }

    /// Fetches issues for all categories, in sorted category order.
    ///
    /// Never fails as a whole: malformed repository URLs and failed chunks
    /// are recorded in the returned [`FetchReport`] and the run carries on.
    pub async fn fetch_all(&mut self, config: &Config) -> FetchReport {
        let mut report = FetchReport::default();
        let label_clause = build_label_clause(&config.labels);

        for (category, urls) in &config.repositories {
            let span = info_span!("category", category = %category);
            let issues = self
                .fetch_category(category, urls, config.page_size(), &label_clause, &mut report)
                .instrument(span)
                .await;
            report.issues.insert(category.clone(), issues);
        }

        info!(
            categories = report.issues.len(),
            issues = report.issue_count(),
            failed_chunks = report.failures.len(),
            truncated_chunks = report.truncated.len(),
            skipped = report.skipped.len(),
            requests = report.requests,
            cache_hits = report.cache_hits,
            "Fetch complete"
        );
        report
    }

    async fn fetch_category(
        &mut self,
        category: &str,
        urls: &[String],
        per_page: u8,
        label_clause: &str,
        report: &mut FetchReport,
    ) -> Vec<Issue> {
        info!(repositories = urls.len(), "Fetching issues");

        let repositories = parse_repositories(category, urls, report);
        let chunk_size = self.options.chunk_size.max(1);
        let mut issues = Vec::new();

        for (index, chunk) in repositories.chunks(chunk_size).enumerate() {
            let fetched = self
                .fetch_chunk(category, index, chunk, per_page, label_clause, report)
                .await;
            issues.extend(fetched);
        }

        sort_issues(&mut issues);
        info!(count = issues.len(), "Category complete");
        issues
    }

    /// Fetches one chunk. On failure the queried part of the chunk is
    /// dropped and recorded; issues served from the cache are kept. A search
    /// stopped by the result cap keeps what it collected, is recorded as
    /// truncated, and is not cached.
    async fn fetch_chunk(
        &mut self,
        category: &str,
        index: usize,
        chunk: &[RepositoryId],
        per_page: u8,
        label_clause: &str,
        report: &mut FetchReport,
    ) -> Vec<Issue> {
        let (mut issues, to_fetch) = match &self.cache {
            Some(cache) => cache.partition(chunk, label_clause),
            None => (Vec::new(), chunk.to_vec()),
        };
        report.cache_hits += chunk.len() - to_fetch.len();

        if to_fetch.is_empty() {
            debug!(chunk = index, "Chunk served entirely from cache");
            return issues;
        }

        let query = build_search_query(&to_fetch, label_clause);
        debug!(chunk = index, query = %query, "Executing issue search");

        match self
            .search_all_pages(&query, per_page, &mut report.requests)
            .await
        {
            Ok(outcome) => {
                let fetched: Vec<Issue> = outcome.issues.iter().map(to_browsable).collect();
                if outcome.truncated {
                    // Capped results are never cached
                    report.truncated.push(TruncatedChunk {
                        category: category.to_string(),
                        chunk: index,
                        repositories: to_fetch,
                        collected: fetched.len(),
                    });
                } else if let Some(cache) = self.cache.as_mut() {
                    cache.store(&to_fetch, &fetched, label_clause);
                }
                issues.extend(fetched);
            }
            Err(e) => {
                warn!(chunk = index, error = %e, "Failed to fetch issues for chunk");
                report.failures.push(ChunkFailure {
                    category: category.to_string(),
                    chunk: index,
                    repositories: to_fetch,
                    error: e.to_string(),
                });
            }
        }

        issues
    }

    /// Runs a search, following next-page links until none remain or the
    /// result cap is reached.
    ///
    /// Any page error fails the whole search; pages already fetched are
    /// discarded with it.
    async fn search_all_pages(
        &self,
        query: &str,
        per_page: u8,
        requests: &mut usize,
    ) -> Result<SearchOutcome, GitHubError> {
        let mut issues = Vec::new();
        let mut truncated = false;
        let mut page = 1;

        loop {
            debug!(page, "Fetching page");
            *requests += 1;
            let result = self.client.search_issues(query, per_page, page).await?;
            issues.extend(result.issues);

            match result.next_page {
                None => break,
                Some(_) if issues.len() >= MAX_SEARCH_RESULTS => {
                    warn!(
                        max = MAX_SEARCH_RESULTS,
                        "Reached maximum search results limit"
                    );
                    truncated = true;
                    break;
                }
                Some(next) if next <= page => {
                    return Err(GitHubError::UnexpectedResponse(format!(
                        "next page {next} does not follow page {page}"
                    )));
                }
                Some(next) => page = next,
            }
        }

        Ok(SearchOutcome { issues, truncated })
    }
}

/// Parses a category's repository URLs, skipping and recording bad ones.
fn parse_repositories(
    category: &str,
    urls: &[String],
    report: &mut FetchReport,
) -> Vec<RepositoryId> {
    let mut repositories = Vec::with_capacity(urls.len());

    for url in urls {
        match parse_repository_url(url) {
            Ok(repository) => repositories.push(repository),
            Err(e) => {
                warn!(url = %url, error = %e, "Skipping repository");
                report.skipped.push(SkippedRepository {
                    category: category.to_string(),
                    url: url.clone(),
                    error: e,
                });
            }
        }
    }

    let parsed = repositories.len();
    let repositories = dedupe_repositories(repositories);
    if repositories.len() < parsed {
        debug!(
            duplicates = parsed - repositories.len(),
            "Dropped repeated repositories"
        );
    }
    repositories
}
