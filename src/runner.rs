use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};

use crate::config::Config;
use crate::credentials::{TELEGRAM_BOT_TOKEN_VAR, TELEGRAM_CHAT_ID_VAR};
use crate::error::ReminderError;
use crate::github::{PullRequestSource, RepoId};
use crate::notify::NotificationChannel;
use crate::output::format_report;
use crate::stale::{canonical, compute_threshold, filter_stale_with};

/// State shared by every repository of one run.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub config: Config,
    /// Computed once, so a slow run does not shift the window
    pub threshold: DateTime<Utc>,
}

impl RunContext {
    /// Fails when the window reaches past the earliest representable date.
    pub fn new(config: Config, now: DateTime<Utc>) -> Result<Self, ReminderError> {
        let threshold = compute_threshold(now, config.days_range).ok_or_else(|| {
            ReminderError::Config(format!(
                "days_range: {} days before now is out of range",
                config.days_range
            ))
        })?;
        Ok(Self { config, threshold })
    }
}

/// Outcome counts of a run, one entry per configured repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub sent: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Fetches, filters, formats and sends one report per configured repository.
pub struct ReminderRunner<'a> {
    source: &'a dyn PullRequestSource,
    ctx: &'a RunContext,
}

impl<'a> ReminderRunner<'a> {
    pub fn new(source: &'a dyn PullRequestSource, ctx: &'a RunContext) -> Self {
        Self { source, ctx }
    }

    /// Build the report for a single repository without sending it.
    pub async fn build_report(&self, repo: &str) -> Result<String, ReminderError> {
        let repo_id: RepoId = repo.parse()?;
        let config = &self.ctx.config;

        let repo_pulls = self
            .source
            .open_pull_requests(&repo_id, config.sort_direction)
            .await
            .map_err(|source| ReminderError::Fetch {
                repo: repo_id.to_string(),
                source,
            })?;

        let open_count = repo_pulls.pulls.len();
        let stale = filter_stale_with(repo_pulls.pulls, self.ctx.threshold, config.filter_mode);
        debug!(
            "{}: {} open, {} selected for the report",
            repo_id,
            open_count,
            stale.len()
        );

        Ok(format_report(
            &repo_id.to_string(),
            config.days_range,
            &repo_pulls.html_url,
            &stale,
        ))
    }

    async fn process_repo(
        &self,
        repo: &str,
        channel: &dyn NotificationChannel,
    ) -> Result<(), ReminderError> {
        let message = self.build_report(repo).await?;

        channel
            .send(&message)
            .await
            .map_err(|source| ReminderError::Delivery {
                repo: repo.to_string(),
                channel: channel.name().to_string(),
                source,
            })
    }

    /// Process every configured repository in order.
    ///
    /// Per-repository failures are logged and counted, never returned. With
    /// no channel nothing is fetched or sent and every repository counts as
    /// skipped.
    pub async fn run(&self, channel: Option<&dyn NotificationChannel>) -> RunSummary {
        let repos = &self.ctx.config.repos;
        let mut summary = RunSummary::default();

        let Some(channel) = channel else {
            warn!(
                "Notifications disabled: {} and {} are both unset; skipping {} repositories \
                 (setting only one of them is a configuration error)",
                TELEGRAM_BOT_TOKEN_VAR,
                TELEGRAM_CHAT_ID_VAR,
                repos.len()
            );
            summary.skipped = repos.len();
            return summary;
        };

        info!(
            "Checking {} repositories for pull requests opened after {} UTC",
            repos.len(),
            canonical(&self.ctx.threshold)
        );

        for repo in repos {
            match self.process_repo(repo, channel).await {
                Ok(()) => {
                    info!("Sent reminder for {} via {}", repo, channel.name());
                    summary.sent += 1;
                }
                Err(e) => {
                    error!("❌ Error processing repository '{}': {}", repo, e);
                    summary.failed += 1;
                }
            }
        }

        summary
    }
}
