//! Markdown report generation.
//!
//! Renders one page per category plus a `README.md` index, and writes them
//! below the configured destination.

mod error;
mod metadata;
mod renderer;
mod writer;

pub use error::MarkdownError;
pub use metadata::{AssigneeMetadata, IssueMetadata, LabelMetadata};
pub use renderer::{create_handlebars_registry, MarkdownRenderer};
pub use writer::write_reports;

use crate::config::Config;
use crate::fetcher::IssueMap;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Directory holding the category pages, relative to the destination.
pub const ISSUES_DIR: &str = "issues";

/// Name of the index page.
pub const INDEX_FILE: &str = "README.md";

/// A rendered file, relative to the report destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    pub relative_path: PathBuf,
    pub content: String,
}

/// Renders every category page followed by the index.
///
/// Categories appear in the map's (sorted) order.
///
/// # Errors
///
/// Returns [`MarkdownError`] if any page fails to render.
pub fn render_reports(
    config: &Config,
    issues: &IssueMap,
    generated_at: DateTime<Utc>,
) -> Result<Vec<ReportFile>, MarkdownError> {
    let renderer = MarkdownRenderer::new();
    let mut files = Vec::with_capacity(issues.len() + 1);

    for (category, category_issues) in issues {
        files.push(ReportFile {
            relative_path: PathBuf::from(ISSUES_DIR).join(format!("{category}.md")),
            content: renderer.render_category(
                category,
                category_issues,
                config.include_metadata,
            )?,
        });
    }

    let index = renderer.render_index(
        &config.description,
        issues
            .iter()
            .map(|(category, category_issues)| (category.as_str(), category_issues.len())),
        generated_at,
    )?;
    files.push(ReportFile {
        relative_path: PathBuf::from(INDEX_FILE),
        content: index,
    });

    Ok(files)
}
