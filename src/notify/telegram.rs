use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ChannelError, NotificationChannel};
use crate::credentials::TelegramCredentials;

const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Markup mode so the `<a href>` links in reports render
const PARSE_MODE: &str = "HTML";

/// Chat-webhook channel posting through the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramChannel {
    client: reqwest::Client,
    api_base: String,
    bot_token: String,
    chat_id: String,
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    ok: bool,
    description: Option<String>,
}

impl TelegramChannel {
    /// Build a channel. Both values must be non-blank.
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Result<Self, ChannelError> {
        let bot_token: String = bot_token.into();
        let chat_id: String = chat_id.into();
        let bot_token = bot_token.trim().to_string();
        let chat_id = chat_id.trim().to_string();

        if bot_token.is_empty() {
            return Err(ChannelError::MissingCredential("Telegram bot token"));
        }
        if chat_id.is_empty() {
            return Err(ChannelError::MissingCredential("Telegram chat ID"));
        }

        // No-op when main already installed it
        let _ = rustls::crypto::ring::default_provider().install_default();

        Ok(Self {
            client: reqwest::Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            bot_token,
            chat_id,
        })
    }

    pub fn from_credentials(credentials: TelegramCredentials) -> Result<Self, ChannelError> {
        Self::new(credentials.bot_token, credentials.chat_id)
    }

    /// Point the channel at a different Bot API host (self-hosted server, tests)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        let api_base: String = api_base.into();
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, self.bot_token)
    }

    fn build_request(&self, message: &str) -> Result<reqwest::Request, ChannelError> {
        self.client
            .post(self.endpoint())
            .form(&SendMessage {
                chat_id: &self.chat_id,
                text: message,
                parse_mode: PARSE_MODE,
            })
            .build()
            .map_err(|e| ChannelError::Transport(e.without_url()))
    }
}

impl fmt::Debug for TelegramChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramChannel")
            .field("api_base", &self.api_base)
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

#[async_trait]
impl NotificationChannel for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn send(&self, message: &str) -> Result<(), ChannelError> {
        let request = self.build_request(message)?;

        // Errors carry the request URL, which embeds the bot token
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ChannelError::Transport(e.without_url()))?;

        let status = response.status();
        let body = response.json::<ApiResponse>().await.ok();
        debug!("Telegram answered {}", status);

        match body {
            Some(body) if body.ok && status.is_success() => Ok(()),
            Some(body) => Err(ChannelError::Rejected {
                status: status.as_u16(),
                description: body.description.unwrap_or_else(|| "no description".to_string()),
            }),
            None if status.is_success() => Ok(()),
            None => Err(ChannelError::Rejected {
                status: status.as_u16(),
                description: status.canonical_reason().unwrap_or("unknown").to_string(),
            }),
        }
    }
}
