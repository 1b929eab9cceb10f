//! Machine-readable issue metadata embedded in category pages.

use crate::github::Issue;
use chrono::SecondsFormat;
use serde::Serialize;

/// JSON block written after a category table when metadata is enabled.
#[derive(Debug, Clone, Serialize)]
pub struct IssueMetadata {
    pub title: String,
    pub body: String,
    pub labels: Vec<LabelMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<AssigneeMetadata>,
    pub comments: u32,
    pub updated_at: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LabelMetadata {
    pub name: String,
    pub color: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssigneeMetadata {
    pub login: String,
}

impl From<&Issue> for IssueMetadata {
    fn from(issue: &Issue) -> Self {
        Self {
            title: issue.title.clone(),
            body: issue.body.clone(),
            labels: issue
                .labels
                .iter()
                .map(|label| LabelMetadata {
                    name: label.name.clone(),
                    color: label.color.clone(),
                    description: label.description.clone().unwrap_or_default(),
                })
                .collect(),
            assignee: issue.assignee.as_ref().map(|user| AssigneeMetadata {
                login: user.login.clone(),
            }),
            comments: issue.comments,
            updated_at: issue.updated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            url: issue.url.clone(),
        }
    }
}

impl IssueMetadata {
    /// Pretty-printed JSON that is safe to place inside an HTML comment.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_comment_json(&self) -> Result<String, serde_json::Error> {
        // `-->` only occurs inside string values, where > is equivalent
        Ok(serde_json::to_string_pretty(self)?.replace("-->", "--\\u003e"))
    }
}
