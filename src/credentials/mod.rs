use std::fmt;

/// GitHub personal access token used for all API calls
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Telegram bot token used by the chat channel
pub const TELEGRAM_BOT_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";

/// Telegram chat (destination) identifier
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

#[derive(Debug, PartialEq, Eq)]
pub enum CredentialError {
    /// A required variable is unset or blank
    Missing(&'static str),
    /// Only one half of a credential pair is set
    Incomplete { present: &'static str, missing: &'static str },
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialError::Missing(var) => {
                write!(f, "{} is not set. Export it or add it to a .env file", var)
            }
            CredentialError::Incomplete { present, missing } => write!(
                f,
                "{} is set but {} is not. Set both to enable notifications",
                present, missing
            ),
        }
    }
}

impl std::error::Error for CredentialError {}

/// Telegram credential pair read from the environment
#[derive(Clone, PartialEq, Eq)]
pub struct TelegramCredentials {
    pub bot_token: String,
    pub chat_id: String,
}

impl fmt::Debug for TelegramCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramCredentials")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

/// Read an environment variable, treating blank values as unset.
pub fn read_env(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(val) => {
            let trimmed = val.trim().to_string();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            }
        }
        Err(_) => None,
    }
}

/// The GitHub token is mandatory; its absence is fatal.
pub fn github_token_from_env() -> Result<String, CredentialError> {
    read_env(GITHUB_TOKEN_VAR).ok_or(CredentialError::Missing(GITHUB_TOKEN_VAR))
}

/// Read the Telegram credential pair.
///
/// `Ok(None)` means neither variable is set, i.e. notifications are not
/// configured. A half-configured pair is an error.
pub fn telegram_credentials_from_env() -> Result<Option<TelegramCredentials>, CredentialError> {
    match (read_env(TELEGRAM_BOT_TOKEN_VAR), read_env(TELEGRAM_CHAT_ID_VAR)) {
        (Some(bot_token), Some(chat_id)) => Ok(Some(TelegramCredentials { bot_token, chat_id })),
        (None, None) => Ok(None),
        (Some(_), None) => Err(CredentialError::Incomplete {
            present: TELEGRAM_BOT_TOKEN_VAR,
            missing: TELEGRAM_CHAT_ID_VAR,
        }),
        (None, Some(_)) => Err(CredentialError::Incomplete {
            present: TELEGRAM_CHAT_ID_VAR,
            missing: TELEGRAM_BOT_TOKEN_VAR,
        }),
    }
}
