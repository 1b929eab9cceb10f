#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use issue_digest::{GitHubApi, GitHubError, Issue, Label, SearchPage, User};
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::sync::Mutex;

/// Fixed point in time the fake issues are dated from.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 9, 10, 0, 0).unwrap()
}

/// An issue as the search endpoint returns it, with API-form URLs.
pub fn api_issue(repo: &str, number: u64, title: &str, hours_ago: i64) -> Issue {
    Issue {
        number,
        title: title.to_string(),
        body: format!("Body of {title}"),
        url: format!("https://api.github.com/repos/{repo}/issues/{number}"),
        repository_url: format!("https://api.github.com/repos/{repo}"),
        updated_at: base_time() - Duration::hours(hours_ago),
        comments: 0,
        labels: vec![],
        assignee: None,
    }
}

pub fn label(name: &str) -> Label {
    Label {
        name: name.to_string(),
        color: "ededed".to_string(),
        description: None,
    }
}

pub fn user(login: &str) -> User {
    User {
        login: login.to_string(),
    }
}

/// A recorded search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCall {
    pub query: String,
    pub per_page: u8,
    pub page: u32,
}

impl SearchCall {
    /// Repositories named by the query's `repo:` qualifiers, lower-cased.
    pub fn repositories(&self) -> Vec<String> {
        query_repositories(&self.query)
    }
}

fn query_repositories(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .filter_map(|token| token.strip_prefix("repo:"))
        .map(str::to_lowercase)
        .collect()
}

/// In-memory GitHub that answers searches from a fixed set of issues.
#[derive(Default)]
pub struct FakeGitHub {
    issues: Vec<Issue>,
    failing_repositories: HashSet<String>,
    fail_on_page: Option<u32>,
    repeat_page: bool,
    labels: HashMap<String, Vec<Label>>,
    calls: Mutex<Vec<SearchCall>>,
}

impl FakeGitHub {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self {
            issues,
            ..Default::default()
        }
    }

    /// Any query naming `repo` fails.
    pub fn failing_for(mut self, repo: &str) -> Self {
        self.failing_repositories.insert(repo.to_lowercase());
        self
    }

    /// Every query fails once it asks for `page`.
    pub fn failing_on_page(mut self, page: u32) -> Self {
        self.fail_on_page = Some(page);
        self
    }

    /// Advertises the current page again instead of the next one.
    pub fn repeating_pages(mut self) -> Self {
        self.repeat_page = true;
        self
    }

    pub fn with_labels(mut self, repo: &str, labels: Vec<Label>) -> Self {
        self.labels.insert(repo.to_lowercase(), labels);
        self
    }

    pub fn calls(&self) -> Vec<SearchCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of queries that named `repo`.
    pub fn queries_for(&self, repo: &str) -> usize {
        let repo = repo.to_lowercase();
        self.calls()
            .iter()
            .filter(|call| call.page == 1 && call.repositories().contains(&repo))
            .count()
    }

    fn search(&self, query: &str, per_page: u8, page: u32) -> Result<SearchPage, GitHubError> {
        self.calls.lock().unwrap().push(SearchCall {
            query: query.to_string(),
            per_page,
            page,
        });

        let repositories = query_repositories(query);
        if repositories
            .iter()
            .any(|repo| self.failing_repositories.contains(repo))
        {
            return Err(GitHubError::UnexpectedResponse(
                "github API error".to_string(),
            ));
        }
        if self.fail_on_page == Some(page) {
            return Err(GitHubError::UnexpectedResponse(format!(
                "page {page} unavailable"
            )));
        }

        let matching: Vec<Issue> = self
            .issues
            .iter()
            .filter(|issue| {
                let repo = issue
                    .repository_url
                    .trim_start_matches("https://api.github.com/repos/")
                    .to_lowercase();
                repositories.contains(&repo)
            })
            .cloned()
            .collect();

        let per_page = usize::from(per_page.max(1));
        let start = (page as usize - 1) * per_page;
        let end = (start + per_page).min(matching.len());
        let issues = matching.get(start..end).unwrap_or_default().to_vec();
        let next = if self.repeat_page { page } else { page + 1 };
        let next_page = (end < matching.len()).then_some(next);

        Ok(SearchPage { issues, next_page })
    }
}

impl GitHubApi for FakeGitHub {
    fn search_issues(
        &self,
        query: &str,
        per_page: u8,
        page: u32,
    ) -> impl Future<Output = Result<SearchPage, GitHubError>> + Send {
        std::future::ready(self.search(query, per_page, page))
    }

    fn list_labels(
        &self,
        owner: &str,
        name: &str,
    ) -> impl Future<Output = Result<Vec<Label>, GitHubError>> + Send {
        let key = format!("{owner}/{name}").to_lowercase();
        let result = self.labels.get(&key).cloned().ok_or_else(|| {
            GitHubError::UnexpectedResponse(format!("repository {key} not found"))
        });
        std::future::ready(result)
    }
}
