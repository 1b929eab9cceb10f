//! Issue records used across fetching and rendering.

use chrono::{DateTime, Utc};
use octocrab::models;
use serde::{Deserialize, Serialize};

/// An issue returned by the search endpoint.
///
/// Only `url` and `repository_url` are ever modified after conversion, when
/// they are rewritten from API to browsable addresses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue number within its repository.
    pub number: u64,

    /// Issue title.
    pub title: String,

    /// Issue body; empty when the issue has none.
    #[serde(default)]
    pub body: String,

    /// Issue address. API form until rewritten.
    pub url: String,

    /// Repository address. API form until rewritten.
    pub repository_url: String,

    /// Last update time.
    pub updated_at: DateTime<Utc>,

    /// Number of comments.
    #[serde(default)]
    pub comments: u32,

    /// Labels in the order GitHub returned them.
    #[serde(default)]
    pub labels: Vec<Label>,

    /// Assigned user, if any.
    #[serde(default)]
    pub assignee: Option<User>,
}

/// An issue label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A GitHub account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
}

impl From<models::issues::Issue> for Issue {
    fn from(issue: models::issues::Issue) -> Self {
        Self {
            number: issue.number,
            title: issue.title,
            body: issue.body.unwrap_or_default(),
            url: issue.url.to_string(),
            repository_url: issue.repository_url.to_string(),
            updated_at: issue.updated_at,
            comments: issue.comments,
            labels: issue.labels.into_iter().map(Label::from).collect(),
            assignee: issue.assignee.map(User::from),
        }
    }
}

impl From<models::Label> for Label {
    fn from(label: models::Label) -> Self {
        Self {
            name: label.name,
            color: label.color,
            description: label.description,
        }
    }
}

impl From<models::Author> for User {
    fn from(author: models::Author) -> Self {
        Self {
            login: author.login,
        }
    }
}
