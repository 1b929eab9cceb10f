//! Runner configuration.

use crate::fetcher::FetchOptions;
use std::path::{Path, PathBuf};

/// Configuration for running the issue digest.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the report configuration file.
    config_path: PathBuf,
    /// GitHub token used for API calls, if any.
    token: Option<String>,
    /// Whether to preview the reports without writing them.
    dry_run: bool,
    /// Chunking and caching options.
    fetch_options: FetchOptions,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    ///
    /// An empty or blank token counts as no token.
    pub fn new(config_path: PathBuf, token: Option<String>, dry_run: bool) -> Self {
        let token = token.filter(|token| !token.trim().is_empty());
        Self {
            config_path,
            token,
            dry_run,
            fetch_options: FetchOptions::default(),
        }
    }

    /// Sets custom fetch options.
    pub fn with_fetch_options(mut self, fetch_options: FetchOptions) -> Self {
        self.fetch_options = fetch_options;
        self
    }

    /// Returns the report configuration path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the fetch options.
    pub fn fetch_options(&self) -> FetchOptions {
        self.fetch_options
    }
}
