//! Repository identifiers and URL parsing.

use super::RepositoryUrlError;
use std::fmt;
use url::Url;

/// Host every configured repository must live on.
const GITHUB_HOST: &str = "github.com";

/// Owner and name of a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RepositoryId {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl RepositoryId {
    /// Creates an identifier from its parts.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Full repository name in "owner/name" format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Browsable URL of the repository.
    #[must_use]
    pub fn html_url(&self) -> String {
        format!("https://{GITHUB_HOST}/{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Extracts owner and name from a `https://github.com/<owner>/<name>[/...]` URL.
///
/// Any path after the first two segments (e.g. `/issues/5`) is ignored.
///
/// # Errors
///
/// Returns [`RepositoryUrlError`] when the string is not a URL, points at
/// another host, or lacks either the owner or the name segment.
pub fn parse_repository_url(url: &str) -> Result<RepositoryId, RepositoryUrlError> {
    let parsed = Url::parse(url.trim()).map_err(|e| RepositoryUrlError::Malformed {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    if parsed.scheme() != "https" || parsed.host_str() != Some(GITHUB_HOST) {
        return Err(RepositoryUrlError::UnsupportedHost {
            url: url.to_string(),
        });
    }

    let mut segments = parsed
        .path_segments()
        .ok_or_else(|| RepositoryUrlError::MissingSegments {
            url: url.to_string(),
        })?;

    match (segments.next(), segments.next()) {
        (Some(owner), Some(name)) if !owner.is_empty() && !name.is_empty() => {
            Ok(RepositoryId::new(owner, name))
        }
        _ => Err(RepositoryUrlError::MissingSegments {
            url: url.to_string(),
        }),
    }
}
