//! Deterministic issue ordering.

use crate::config::parse_repository_url;
use crate::github::Issue;
use std::cmp::Reverse;

/// Sorts issues by repository name, then most recently updated first.
///
/// The repository is parsed from each issue's (rewritten) URL. Owners only
/// break ties between equally named repositories, and issue numbers break
/// ties between equal timestamps. Issues whose URL cannot be parsed go last.
pub fn sort_issues(issues: &mut [Issue]) {
    issues.sort_by_cached_key(|issue| {
        let repository = parse_repository_url(&issue.url).ok();
        let unparsed = repository.is_none();
        let (name, owner) = repository
            .map(|repo| (repo.name, repo.owner))
            .unwrap_or_default();
        (
            unparsed,
            name,
            owner,
            Reverse(issue.updated_at),
            Reverse(issue.number),
        )
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn issue(repo: &str, number: u64, hours_ago: i64) -> Issue {
        let base = Utc.with_ymd_and_hms(2025, 3, 9, 10, 0, 0).unwrap();
        Issue {
            number,
            title: format!("Issue {number}"),
            body: String::new(),
            url: format!("https://github.com/{repo}/issues/{number}"),
            repository_url: format!("https://github.com/{repo}"),
            updated_at: base - Duration::hours(hours_ago),
            comments: 0,
            labels: vec![],
            assignee: None,
        }
    }

    fn numbers(issues: &[Issue]) -> Vec<u64> {
        issues.iter().map(|i| i.number).collect()
    }

    #[test]
    fn newest_first_within_repository() {
        let mut issues = vec![
            issue("owner/repo", 1, 5),
            issue("owner/repo", 2, 0),
            issue("owner/repo", 3, 2),
        ];

        sort_issues(&mut issues);

        assert_eq!(numbers(&issues), vec![2, 3, 1]);
    }

    #[test]
    fn repository_name_beats_timestamp() {
        let mut issues = vec![
            issue("owner/zeta", 1, 0),
            issue("owner/alpha", 2, 100),
            issue("someone/beta", 3, 50),
        ];

        sort_issues(&mut issues);

        assert_eq!(numbers(&issues), vec![2, 3, 1]);
    }

    #[test]
    fn name_orders_before_owner() {
        let mut issues = vec![issue("aaa/zeta", 1, 0), issue("zzz/alpha", 2, 0)];

        sort_issues(&mut issues);

        assert_eq!(numbers(&issues), vec![2, 1]);
    }

    #[test]
    fn unparsable_urls_go_last() {
        let mut broken = issue("owner/alpha", 9, 0);
        broken.url = "not a url".to_string();
        let mut issues = vec![broken, issue("owner/zeta", 1, 0)];

        sort_issues(&mut issues);

        assert_eq!(numbers(&issues), vec![1, 9]);
    }
}
