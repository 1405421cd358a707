use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ReminderError;

/// An open pull request as seen by the reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestSummary {
    pub number: u64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// Open pull requests of one repository, created-ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPulls {
    /// Link to the repository itself
    pub html_url: String,
    pub pulls: Vec<PullRequestSummary>,
}

/// Order in which open pull requests are listed, by creation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum SortDirection {
    /// Oldest first
    #[serde(rename = "asc")]
    Ascending,
    /// Newest first, GitHub's own order for `sort=created`
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

/// Repository identifier in "org/name" form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    pub fn html_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoId {
    type Err = ReminderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.split('/').collect::<Vec<_>>().as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => Ok(RepoId {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(ReminderError::InvalidRepository(s.to_string())),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
