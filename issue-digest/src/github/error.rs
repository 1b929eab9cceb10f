//! GitHub client error types.

use thiserror::Error;

/// Errors raised while talking to the GitHub API.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// The response could not be used as-is.
    #[error("Unexpected GitHub response: {0}")]
    UnexpectedResponse(String),
}
