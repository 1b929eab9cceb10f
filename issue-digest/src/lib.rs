#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod fetcher;
pub mod github;
pub mod labels;
pub mod markdown;
pub mod runner;
pub mod summary;

pub use config::{
    load_config, parse_repository_url, Config, ConfigError, RepositoryId, RepositoryUrlError,
};
pub use fetcher::{
    build_label_clause, build_search_query, rewrite_api_url, sort_issues, to_browsable,
    ChunkFailure, FetchOptions, FetchReport, IssueCache, IssueFetcher, IssueMap,
    SkippedRepository, TruncatedChunk, DEFAULT_CHUNK_SIZE, MAX_SEARCH_RESULTS,
};
pub use github::{build_client, GitHubApi, GitHubError, Issue, Label, SearchPage, User};
pub use labels::{collect_labels, RepositoryLabels};
pub use markdown::{
    render_reports, write_reports, IssueMetadata, MarkdownError, MarkdownRenderer, ReportFile,
};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::RunSummary;
