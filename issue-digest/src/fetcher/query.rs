//! Search query construction.

use crate::config::RepositoryId;
use std::collections::HashSet;

/// Repositories combined into a single search query.
///
/// GitHub rejects search queries that are too long or carry too many
/// `repo:` qualifiers.
pub const DEFAULT_CHUNK_SIZE: usize = 50;

/// Builds the label clause: every label quoted, comma-joined.
///
/// Example: `"good first issue","help wanted"`
#[must_use]
pub fn build_label_clause(labels: &[String]) -> String {
    labels
        .iter()
        .map(|label| format!("\"{label}\""))
        .collect::<Vec<_>>()
        .join(",")
}

/// Builds an issue search query over a chunk of repositories.
///
/// Format: `repo:<owner>/<name> ... is:open is:issue label:<clause>`. The
/// `label:` qualifier is left out when the clause is empty.
#[must_use]
pub fn build_search_query(repositories: &[RepositoryId], label_clause: &str) -> String {
    let mut query = repositories
        .iter()
        .map(|repo| format!("repo:{}", repo.full_name()))
        .collect::<Vec<_>>()
        .join(" ");

    if !query.is_empty() {
        query.push(' ');
    }
    query.push_str("is:open is:issue");

    if !label_clause.is_empty() {
        query.push_str(" label:");
        query.push_str(label_clause);
    }

    query
}

/// Removes repeated repositories, comparing names case-insensitively.
///
/// The first occurrence wins, so the remaining order is stable.
pub(crate) fn dedupe_repositories(repositories: Vec<RepositoryId>) -> Vec<RepositoryId> {
    let mut seen = HashSet::new();
    repositories
        .into_iter()
        .filter(|repo| seen.insert(repo.full_name().to_lowercase()))
        .collect()
}
