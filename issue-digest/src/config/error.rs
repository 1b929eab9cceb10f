//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading the report configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("Failed to parse YAML config '{path}': {source}")]
    YamlError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse TOML config '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Validation error in the configuration.
    #[error("Validation error in '{path}': {message}")]
    ValidationError { path: String, message: String },

    /// Missing required file.
    #[error("Missing required file: {path}")]
    MissingFile { path: String },
}

/// Error returned when a repository URL cannot be split into owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryUrlError {
    /// The string is not a URL at all.
    #[error("Invalid repository URL '{url}': {reason}")]
    Malformed { url: String, reason: String },

    /// The URL does not point at github.com over https.
    #[error("Repository URL '{url}' is not a https://github.com URL")]
    UnsupportedHost { url: String },

    /// Owner or name segment is missing.
    #[error("Repository URL '{url}' must contain both an owner and a repository name")]
    MissingSegments { url: String },
}
