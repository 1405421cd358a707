use async_trait::async_trait;
use std::io::Write;

use super::{ChannelError, NotificationChannel};

/// Prints messages instead of delivering them. Backs `preview`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutChannel;

#[async_trait]
impl NotificationChannel for StdoutChannel {
    fn name(&self) -> &str {
        "stdout"
    }

    async fn send(&self, message: &str) -> Result<(), ChannelError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", message)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stdout_channel_sends() {
        let channel = StdoutChannel;
        assert_eq!(channel.name(), "stdout");
        assert!(channel.send("hello").await.is_ok());
    }
}
