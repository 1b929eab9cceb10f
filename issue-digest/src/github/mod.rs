//! Access to the GitHub API.
//!
//! [`GitHubApi`] is the seam between the fetcher and the network. It is
//! implemented for [`Octocrab`] and, by delegation, for shared references,
//! so callers can keep ownership of a client while lending it to a fetcher.

mod error;
mod models;

pub use error::GitHubError;
pub use models::{Issue, Label, User};

use octocrab::Octocrab;
use std::future::Future;
use tracing::{debug, info};

/// One page of issue search results.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    /// Issues on this page.
    pub issues: Vec<Issue>,

    /// Number of the following page, if the server advertised one.
    pub next_page: Option<u32>,
}

/// Operations the reporting pipeline needs from GitHub.
pub trait GitHubApi {
    /// Runs an issue search and returns the requested page (1-based).
    fn search_issues(
        &self,
        query: &str,
        per_page: u8,
        page: u32,
    ) -> impl Future<Output = Result<SearchPage, GitHubError>> + Send;

    /// Lists every label defined in a repository.
    fn list_labels(
        &self,
        owner: &str,
        name: &str,
    ) -> impl Future<Output = Result<Vec<Label>, GitHubError>> + Send;
}

impl<T: GitHubApi + Sync> GitHubApi for &T {
    fn search_issues(
        &self,
        query: &str,
        per_page: u8,
        page: u32,
    ) -> impl Future<Output = Result<SearchPage, GitHubError>> + Send {
        (**self).search_issues(query, per_page, page)
    }

    fn list_labels(
        &self,
        owner: &str,
        name: &str,
    ) -> impl Future<Output = Result<Vec<Label>, GitHubError>> + Send {
        (**self).list_labels(owner, name)
    }
}

impl GitHubApi for Octocrab {
    async fn search_issues(
        &self,
        query: &str,
        per_page: u8,
        page: u32,
    ) -> Result<SearchPage, GitHubError> {
        let result = self
            .search()
            .issues_and_pull_requests(query)
            .per_page(per_page)
            .page(page)
            .send()
            .await?;

        search_page(
            result.items,
            result.incomplete_results,
            result.next.is_some(),
            page,
            |issue| issue.pull_request.is_some(),
        )
    }

    async fn list_labels(&self, owner: &str, name: &str) -> Result<Vec<Label>, GitHubError> {
        let mut page = self
            .issues(owner, name)
            .list_labels_for_repo()
            .per_page(100)
            .send()
            .await?;

        let mut labels: Vec<Label> = page.take_items().into_iter().map(Label::from).collect();

        while let Some(mut next_page) = self.get_page::<octocrab::models::Label>(&page.next).await? {
            labels.extend(next_page.take_items().into_iter().map(Label::from));
            page.next = next_page.next;
        }

        debug!(owner, name, count = labels.len(), "Listed labels");
        Ok(labels)
    }
}

/// Turns one raw search page into a [`SearchPage`].
///
/// Pull requests are dropped. A page GitHub flagged as incomplete is an
/// error, since the search timed out and some matches are missing.
fn search_page<T>(
    items: Vec<T>,
    incomplete_results: Option<bool>,
    has_next: bool,
    page: u32,
    is_pull_request: impl Fn(&T) -> bool,
) -> Result<SearchPage, GitHubError>
where
    Issue: From<T>,
{
    if incomplete_results == Some(true) {
        return Err(GitHubError::UnexpectedResponse(format!(
            "search timed out and returned incomplete results on page {page}"
        )));
    }

    let issues = items
        .into_iter()
        .filter(|item| !is_pull_request(item))
        .map(Issue::from)
        .collect();

    Ok(SearchPage {
        issues,
        next_page: has_next.then_some(page + 1),
    })
}

/// Builds a GitHub client, authenticated when a token is supplied.
///
/// # Errors
///
/// Returns [`octocrab::Error`] if the client cannot be constructed.
pub fn build_client(token: Option<&str>) -> Result<Octocrab, octocrab::Error> {
    match token {
        Some(token) => {
            info!("GitHub client initialized with the given credentials");
            Octocrab::builder()
                .personal_token(token.to_string())
                .build()
        }
        None => {
            info!("No GitHub token given, using an unauthenticated client");
            Octocrab::builder().build()
        }
    }
}
