//! Label discovery for configured repositories.
//!
//! Helps pick the `labels` setting by listing what each repository
//! actually uses.

use crate::config::{parse_repository_url, Config, RepositoryId};
use crate::github::GitHubApi;
use tracing::{info, warn};

/// Labels of one repository, or the reason they could not be listed.
#[derive(Debug, Clone)]
pub struct RepositoryLabels {
    /// Category the repository is configured under.
    pub category: String,

    /// The repository.
    pub repository: RepositoryId,

    /// Label names, or an error message.
    pub labels: Result<Vec<String>, String>,
}

/// Lists labels for every parseable repository, category by category.
///
/// Malformed URLs are skipped and failed lookups are kept in the result;
/// neither stops the walk.
pub async fn collect_labels<C: GitHubApi>(client: &C, config: &Config) -> Vec<RepositoryLabels> {
    let mut results = Vec::new();

    for (category, urls) in &config.repositories {
        info!(category = %category, "Listing labels");

        for url in urls {
            let repository = match parse_repository_url(url) {
                Ok(repository) => repository,
                Err(e) => {
                    warn!(url = %url, error = %e, "Skipping repository");
                    continue;
                }
            };

            let labels = match client.list_labels(&repository.owner, &repository.name).await {
                Ok(labels) => Ok(labels.into_iter().map(|label| label.name).collect()),
                Err(e) => {
                    warn!(repo = %repository, error = %e, "Failed to list labels");
                    Err(e.to_string())
                }
            };

            results.push(RepositoryLabels {
                category: category.clone(),
                repository,
                labels,
            });
        }
    }

    results
}
