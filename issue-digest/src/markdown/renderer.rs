//! Markdown renderer.

use super::metadata::IssueMetadata;
use super::MarkdownError;
use crate::config::parse_repository_url;
use crate::github::Issue;
use chrono::{DateTime, Utc};
use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};

/// Category page. Block tags share their lines with text so that no
/// standalone-line whitespace stripping applies.
const CATEGORY_TEMPLATE: &str = "# {{category}}\n\
\n\
| Repository | Title | UpdatedAt | Labels | Assignee | Comments |\n\
| --- | --- | --- | --- | --- | --- |{{#each rows}}\n\
| [{{repository}}]({{repository_url}}) | [{{title}}]({{url}}) | {{updated_at}} | {{labels}} | {{assignee}} | {{comments}} |{{/each}}{{#each metadata}}\n\
\n\
<!--\n\
{{this}}\n\
-->{{/each}}\n\
\n";

/// Index page listing every category.
const INDEX_TEMPLATE: &str = "# Issue List\n\
\n\
Last Updated: {{last_updated}}\n\
\n\
{{description}}\n\
\n\
## Index\n\
\n\
{{#each categories}}- [{{name}} - {{count}} issues available](./issues/{{name}}.md)\n{{/each}}";

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Disable HTML escaping for markdown output
    hbs.register_escape_fn(no_escape);

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    hbs
}

/// Renderer for category pages and the index.
pub struct MarkdownRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    /// Creates a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the page of one category.
    ///
    /// With `include_metadata`, a JSON comment block per issue follows the table.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or metadata serialization fails.
    pub fn render_category(
        &self,
        category: &str,
        issues: &[Issue],
        include_metadata: bool,
    ) -> Result<String, MarkdownError> {
        let rows: Vec<Value> = issues.iter().map(issue_row).collect();

        let metadata = if include_metadata {
            issues
                .iter()
                .map(|issue| IssueMetadata::from(issue).to_comment_json())
                .collect::<Result<Vec<_>, _>>()?
        } else {
            Vec::new()
        };

        let data = json!({
            "category": category,
            "rows": rows,
            "metadata": metadata,
        });

        self.render_template(CATEGORY_TEMPLATE, &data)
    }

    /// Renders the index page.
    ///
    /// `categories` yields `(name, issue count)` pairs in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_index<'a>(
        &self,
        description: &str,
        categories: impl IntoIterator<Item = (&'a str, usize)>,
        generated_at: DateTime<Utc>,
    ) -> Result<String, MarkdownError> {
        let categories: Vec<Value> = categories
            .into_iter()
            .map(|(name, count)| json!({ "name": name, "count": count }))
            .collect();

        let data = json!({
            "last_updated": generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            "description": description,
            "categories": categories,
        });

        self.render_template(INDEX_TEMPLATE, &data)
    }

    /// Renders a template with the given data.
    fn render_template(&self, template: &str, data: &Value) -> Result<String, MarkdownError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}

/// Table cell values for one issue.
fn issue_row(issue: &Issue) -> Value {
    let (repository, repository_url) = match parse_repository_url(&issue.url) {
        Ok(repo) => (repo.name.clone(), repo.html_url()),
        Err(_) => (issue.repository_url.clone(), issue.repository_url.clone()),
    };

    let labels = issue
        .labels
        .iter()
        .map(|label| label.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let assignee = issue
        .assignee
        .as_ref()
        .filter(|user| !user.login.is_empty())
        .map(|user| format!("@{}", user.login))
        .unwrap_or_default();

    json!({
        "repository": repository,
        "repository_url": repository_url,
        "title": escape_cell(&issue.title),
        "url": issue.url,
        "updated_at": issue.updated_at.format("%Y-%m-%d").to_string(),
        "labels": escape_cell(&labels),
        "assignee": assignee,
        "comments": issue.comments,
    })
}

/// Keeps cell text on one line and stops `|` from splitting the cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}
