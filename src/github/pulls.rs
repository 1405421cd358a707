use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use log::{debug, warn};
use octocrab::params::{pulls::Sort, Direction, State};
use octocrab::Octocrab;

use crate::github::types::{PullRequestSummary, RepoId, RepoPulls, SortDirection};

const PER_PAGE: u8 = 100;

/// Lists the open pull requests of a repository.
///
/// Implementations return requests sorted by creation time in `direction`.
#[async_trait]
pub trait PullRequestSource: Send + Sync {
    async fn open_pull_requests(
        &self,
        repo: &RepoId,
        direction: SortDirection,
    ) -> Result<RepoPulls>;
}

/// Create an authenticated GitHub client using a personal access token
pub fn create_client(token: &str) -> Result<Octocrab> {
    Octocrab::builder()
        .personal_token(token.to_string())
        .build()
        .context("Failed to create GitHub client")
}

/// `PullRequestSource` backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubSource {
    client: Octocrab,
}

impl GitHubSource {
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

/// Turn an octocrab error into something a user can act on
fn describe_api_error(e: octocrab::Error) -> anyhow::Error {
    let error_str = format!("{:?}", e);
    if error_str.contains("Not Found") || error_str.contains("404") {
        anyhow!("Repository not found or no access. Check repo name and token permissions (needs 'repo' scope for private repos).")
    } else if error_str.contains("401") || error_str.contains("Bad credentials") {
        anyhow!("Authentication failed. Your GitHub token may be invalid or expired.")
    } else if error_str.contains("rate limit") || error_str.contains("403") {
        anyhow!("GitHub API rate limit exceeded. Wait a few minutes and try again.")
    } else {
        anyhow!("GitHub API error: {}", e)
    }
}

fn convert_pull_request(
    repo: &RepoId,
    pr: octocrab::models::pulls::PullRequest,
) -> Option<PullRequestSummary> {
    let Some(created_at) = pr.created_at else {
        warn!("Skipping {}#{}: no creation timestamp", repo, pr.number);
        return None;
    };

    Some(PullRequestSummary {
        number: pr.number,
        title: pr.title.unwrap_or_default(),
        created_at,
    })
}

#[async_trait]
impl PullRequestSource for GitHubSource {
    async fn open_pull_requests(
        &self,
        repo: &RepoId,
        direction: SortDirection,
    ) -> Result<RepoPulls> {
        debug!("Fetching open PRs for {} ({:?})", repo, direction);

        let repository = self
            .client
            .repos(&repo.owner, &repo.name)
            .get()
            .await
            .map_err(describe_api_error)?;

        let html_url = repository
            .html_url
            .map(|u| u.to_string())
            .unwrap_or_else(|| repo.html_url());

        let first_page = self
            .client
            .pulls(&repo.owner, &repo.name)
            .list()
            .state(State::Open)
            .sort(Sort::Created)
            .direction(match direction {
                SortDirection::Ascending => Direction::Ascending,
                SortDirection::Descending => Direction::Descending,
            })
            .per_page(PER_PAGE)
            .send()
            .await
            .map_err(describe_api_error)?;

        let items = self
            .client
            .all_pages(first_page)
            .await
            .map_err(describe_api_error)?;

        let pulls: Vec<_> = items
            .into_iter()
            .filter_map(|pr| convert_pull_request(repo, pr))
            .collect();

        debug!("  Found {} open PRs for {}", pulls.len(), repo);

        Ok(RepoPulls { html_url, pulls })
    }
}
