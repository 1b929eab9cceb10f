//! Runner error types.

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// No configuration file was given.
    #[error("No config file specified")]
    MissingConfigPath,

    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Rendering or writing the reports failed.
    #[error(transparent)]
    Markdown(#[from] crate::markdown::MarkdownError),
}
