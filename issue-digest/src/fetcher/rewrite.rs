//! API-to-web URL rewriting.

use crate::github::Issue;

/// Host and path prefix of REST API addresses.
pub const API_URL_BASE: &str = "api.github.com/repos";

/// Host of browsable pages.
pub const WEB_URL_BASE: &str = "github.com";

/// Replaces the first API prefix in `url` with the web host.
///
/// `https://api.github.com/repos/o/r/issues/5` becomes
/// `https://github.com/o/r/issues/5`; anything else is returned unchanged.
#[must_use]
pub fn rewrite_api_url(url: &str) -> String {
    url.replacen(API_URL_BASE, WEB_URL_BASE, 1)
}

/// Returns a copy of `issue` whose links point at browsable pages.
///
/// Only `url` and `repository_url` change.
#[must_use]
pub fn to_browsable(issue: &Issue) -> Issue {
    Issue {
        url: rewrite_api_url(&issue.url),
        repository_url: rewrite_api_url(&issue.repository_url),
        ..issue.clone()
    }
}
