//! Report configuration deserialization.

use crate::config::ConfigError;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

/// Largest page size accepted by the GitHub search API.
pub const MAX_PER_PAGE: u32 = 100;

/// Parsed report configuration.
///
/// Categories live in a [`BTreeMap`], so iterating them always yields
/// sorted category names.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Category name mapped to the repository URLs it covers.
    pub repositories: BTreeMap<String, Vec<String>>,

    /// Labels an issue must carry to be reported.
    #[serde(default = "default_labels")]
    pub labels: Vec<String>,

    /// Results requested per search page.
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Directory receiving `README.md` and the `issues/` folder.
    #[serde(default = "default_destination")]
    pub destination: PathBuf,

    /// Free text shown at the top of the index.
    #[serde(default = "default_description")]
    pub description: String,

    /// Whether to embed a JSON metadata block per issue.
    #[serde(default)]
    pub include_metadata: bool,
}

pub(crate) fn default_labels() -> Vec<String> {
    vec!["good first issue".to_string()]
}

pub(crate) fn default_per_page() -> u32 {
    MAX_PER_PAGE
}

pub(crate) fn default_destination() -> PathBuf {
    PathBuf::from(".")
}

pub(crate) fn default_description() -> String {
    "Open issues collected by issue-digest.".to_string()
}

impl Config {
    /// Creates a configuration with defaults for everything except the repositories.
    #[must_use]
    pub fn new(repositories: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            repositories,
            labels: default_labels(),
            per_page: default_per_page(),
            destination: default_destination(),
            description: default_description(),
            include_metadata: false,
        }
    }

    /// Page size as accepted by the search endpoint.
    #[must_use]
    pub fn page_size(&self) -> u8 {
        u8::try_from(self.per_page.clamp(1, MAX_PER_PAGE)).unwrap_or(u8::MAX)
    }

    /// Trims labels, dropping blanks and repeats while keeping their order.
    pub(crate) fn normalize(&mut self) {
        let mut seen = HashSet::new();
        self.labels = std::mem::take(&mut self.labels)
            .into_iter()
            .map(|label| label.trim().to_string())
            .filter(|label| !label.is_empty() && seen.insert(label.clone()))
            .collect();
    }

    /// Validates values that serde cannot check on its own.
    pub(crate) fn validate(&self, path: &str) -> Result<(), ConfigError> {
        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(ConfigError::ValidationError {
                path: path.to_string(),
                message: format!(
                    "per_page must be between 1 and {MAX_PER_PAGE}, got {}",
                    self.per_page
                ),
            });
        }

        for category in self.repositories.keys() {
            // Category names become file names under issues/
            if category.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    path: path.to_string(),
                    message: "category names must not be empty".to_string(),
                });
            }
            if category.contains('/') || category.contains('\\') {
                return Err(ConfigError::ValidationError {
                    path: path.to_string(),
                    message: format!("category '{category}' must not contain path separators"),
                });
            }
            // The index links to issues/<category>.md verbatim
            if category.chars().any(char::is_whitespace) {
                return Err(ConfigError::ValidationError {
                    path: path.to_string(),
                    message: format!("category '{category}' must not contain whitespace"),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_drops_blank_and_repeated_labels() {
        let mut config = Config::new(BTreeMap::new());
        config.labels = vec![
            " help wanted ".to_string(),
            String::new(),
            "bug".to_string(),
            "help wanted".to_string(),
        ];

        config.normalize();

        assert_eq!(config.labels, vec!["help wanted", "bug"]);
    }

    #[test]
    fn validate_rejects_out_of_range_per_page() {
        let mut config = Config::new(BTreeMap::new());
        config.per_page = 0;
        assert!(config.validate("config.yml").is_err());

        config.per_page = 101;
        assert!(config.validate("config.yml").is_err());

        config.per_page = 100;
        assert!(config.validate("config.yml").is_ok());
    }

    #[test]
    fn validate_rejects_category_with_separator() {
        let mut repositories = BTreeMap::new();
        repositories.insert("team/a".to_string(), vec![]);
        let config = Config::new(repositories);

        assert!(matches!(
            config.validate("config.yml"),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn validate_rejects_category_with_whitespace() {
        for name in ["good first", "tabbed\tname"] {
            let mut repositories = BTreeMap::new();
            repositories.insert(name.to_string(), vec![]);
            let config = Config::new(repositories);

            match config.validate("config.yml") {
                Err(ConfigError::ValidationError { message, .. }) => {
                    assert!(message.contains("whitespace"), "{message}");
                }
                other => panic!("expected a validation error for '{name}', got {other:?}"),
            }
        }
    }

    #[test]
    fn page_size_fits_search_limit() {
        let mut config = Config::new(BTreeMap::new());
        config.per_page = 30;
        assert_eq!(config.page_size(), 30);
    }
}
