//! Delivery of finished reminder messages.
//!
//! The runner only sees [`NotificationChannel`]; new destinations are added
//! by implementing the trait, not by touching the runner.

pub mod stdout;
pub mod telegram;

use async_trait::async_trait;
use thiserror::Error;

pub use stdout::StdoutChannel;
pub use telegram::TelegramChannel;

/// Errors raised while building or using a channel.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// A credential needed to build the channel is empty
    #[error("{0} must be provided")]
    MissingCredential(&'static str),

    /// The request never got a response (DNS, TLS, connection, timeout)
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The endpoint answered but refused the message
    #[error("rejected with status {status}: {description}")]
    Rejected { status: u16, description: String },

    #[error("failed to write message: {0}")]
    Io(#[from] std::io::Error),
}

/// Sends a finished text message to one destination.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Short name used in log lines
    fn name(&self) -> &str;

    async fn send(&self, message: &str) -> Result<(), ChannelError>;
}
