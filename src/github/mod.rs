pub mod pulls;
pub mod types;

pub use pulls::{create_client, GitHubSource, PullRequestSource};
pub use types::{PullRequestSummary, RepoId, RepoPulls, SortDirection};
