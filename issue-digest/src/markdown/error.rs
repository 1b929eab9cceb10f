//! Markdown report error types.

/// Errors that can occur while rendering or writing reports.
#[derive(Debug, thiserror::Error)]
pub enum MarkdownError {
    /// Handlebars rendering error.
    #[error("Template rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// Issue metadata could not be serialized.
    #[error("Failed to serialize issue metadata: {0}")]
    MetadataError(#[from] serde_json::Error),

    /// Failed to write or remove a file.
    #[error("Failed to write '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
