use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::window::is_recent;
use crate::github::types::PullRequestSummary;

/// How open pull requests are selected for a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterMode {
    /// Report everything from the first recent request onward
    #[default]
    Sticky,
    /// Report only requests that are individually recent
    PerRequest,
}

/// Select the requests to report, using sticky inclusion.
///
/// The first request created after `threshold` and every request following
/// it are returned, in input order, whatever their own creation date. With
/// newest-first input (the default fetch order) every request is reported as
/// soon as the newest one is recent.
pub fn filter_stale(
    requests: Vec<PullRequestSummary>,
    threshold: DateTime<Utc>,
) -> Vec<PullRequestSummary> {
    filter_stale_with(requests, threshold, FilterMode::Sticky)
}

/// Select the requests to report using the given mode. Input order is kept.
pub fn filter_stale_with(
    mut requests: Vec<PullRequestSummary>,
    threshold: DateTime<Utc>,
    mode: FilterMode,
) -> Vec<PullRequestSummary> {
    match mode {
        FilterMode::Sticky => {
            let start = requests
                .iter()
                .position(|pr| is_recent(&pr.created_at, &threshold))
                .unwrap_or(requests.len());
            requests.split_off(start)
        }
        FilterMode::PerRequest => requests
            .into_iter()
            .filter(|pr| is_recent(&pr.created_at, &threshold))
            .collect(),
    }
}
