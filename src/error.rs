use thiserror::Error;

use crate::notify::ChannelError;

/// Errors raised while producing reminders.
///
/// `Config` and `Credentials` are fatal and stop the process before any
/// repository is touched. The remaining variants belong to a single
/// repository: the runner logs them and moves on to the next one.
#[derive(Debug, Error)]
pub enum ReminderError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("missing credential: {0}")]
    Credentials(String),

    #[error("invalid repository identifier '{0}': expected 'org/name'")]
    InvalidRepository(String),

    #[error("failed to fetch pull requests for {repo}: {source:#}")]
    Fetch {
        repo: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to deliver reminder for {repo} via {channel}: {source}")]
    Delivery {
        repo: String,
        channel: String,
        #[source]
        source: ChannelError,
    },
}

impl ReminderError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, ReminderError::Config(_) | ReminderError::Credentials(_))
    }
}
