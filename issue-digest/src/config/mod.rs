//! Configuration loading and repository URL parsing.
//!
//! The report configuration is a YAML (or TOML) file mapping category names
//! to repository URLs, plus the labels to search for and output options.

mod error;
mod repository;
mod settings;

pub use error::{ConfigError, RepositoryUrlError};
pub use repository::{parse_repository_url, RepositoryId};
pub use settings::{Config, MAX_PER_PAGE};

use std::path::Path;
use tracing::{debug, info};

/// Loads and validates a configuration file.
///
/// Files ending in `.toml` are parsed as TOML; everything else is parsed as
/// YAML. Missing optional keys receive their defaults:
///
/// ```yaml
/// repositories:
///   rust:
///     - https://github.com/rust-lang/rust
/// labels:            # default: ["good first issue"]
///   - good first issue
/// per_page: 100      # default: 100
/// destination: "."   # default: "."
/// include_metadata: false
/// ```
///
/// Repository URLs are not checked here; malformed entries are skipped
/// while fetching.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file is missing, unreadable, malformed or
/// fails validation.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    info!(path = %path.display(), "Loading configuration");

    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let mut config = if is_toml {
        parse_toml(&content, path)?
    } else {
        parse_yaml(&content, path)?
    };

    config.normalize();
    config.validate(&path.display().to_string())?;

    debug!(
        categories = config.repositories.len(),
        labels = ?config.labels,
        per_page = config.per_page,
        "Configuration loaded"
    );
    Ok(config)
}

fn parse_yaml(content: &str, path: &Path) -> Result<Config, ConfigError> {
    serde_yaml::from_str(content).map_err(|e| ConfigError::YamlError {
        path: path.display().to_string(),
        source: e,
    })
}

fn parse_toml(content: &str, path: &Path) -> Result<Config, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::TomlError {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn applies_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            "config.yml",
            r#"
repositories:
  owner1:
    - repo1
    - repo2
"#,
        );

        let config = load_config(&path).unwrap();

        assert_eq!(config.labels, vec!["good first issue"]);
        assert_eq!(config.per_page, 100);
        assert_eq!(config.destination, PathBuf::from("."));
        assert!(config.description.contains("issue-digest"));
        assert_eq!(config.repositories["owner1"], vec!["repo1", "repo2"]);
        assert!(!config.include_metadata);
    }

    #[test]
    fn reads_custom_values() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            "config.yaml",
            r#"
repositories:
  owner1:
    - repo1
labels:
  - help wanted
per_page: 50
destination: "./output"
description: "Custom description"
include_metadata: true
"#,
        );

        let config = load_config(&path).unwrap();

        assert_eq!(config.labels, vec!["help wanted"]);
        assert_eq!(config.per_page, 50);
        assert_eq!(config.destination, PathBuf::from("./output"));
        assert_eq!(config.description, "Custom description");
        assert!(config.include_metadata);
    }

    #[test]
    fn reads_toml() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            "config.toml",
            r#"
labels = ["bug"]

[repositories]
tools = ["https://github.com/owner/repo"]
"#,
        );

        let config = load_config(&path).unwrap();

        assert_eq!(config.labels, vec!["bug"]);
        assert_eq!(
            config.repositories["tools"],
            vec!["https://github.com/owner/repo"]
        );
    }

    #[test]
    fn rejects_invalid_yaml() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "config.yml", "invalid: [yaml: content");

        assert!(matches!(
            load_config(&path),
            Err(ConfigError::YamlError { .. })
        ));
    }

    #[test]
    fn requires_repositories() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "config.yml", "labels:\n  - bug\n");

        assert!(matches!(
            load_config(&path),
            Err(ConfigError::YamlError { .. })
        ));
    }

    #[test]
    fn rejects_invalid_per_page() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            "config.yml",
            "repositories: {}\nper_page: 500\n",
        );

        assert!(matches!(
            load_config(&path),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn missing_file() {
        let temp = TempDir::new().unwrap();

        let result = load_config(&temp.path().join("nope.yml"));
        assert!(matches!(result, Err(ConfigError::MissingFile { .. })));
    }
}
