//! Configuration and credentials for the homework bot

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Homework status endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Seconds between poll cycles
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            poll_interval_seconds: default_poll_interval(),
        }
    }
}

fn default_endpoint() -> String {
    "https://practicum.yandex.ru/api/user_api/homework_statuses/".to_string()
}

fn default_poll_interval() -> u64 {
    600
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::HomeworkBotError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}

/// API credentials, loaded once at startup and immutable afterwards
#[derive(Clone)]
pub struct Credentials {
    /// Token for the homework status API
    pub practicum_token: String,
    /// Telegram bot token
    pub telegram_token: String,
    /// Destination chat for notifications
    pub telegram_chat_id: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

impl Credentials {
    /// Load credentials from the environment, honoring a `.env` file.
    ///
    /// All three variables must be present and non-empty.
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        let practicum_token = require_var("PRACTICUM_TOKEN")?;
        let telegram_token = require_var("TELEGRAM_TOKEN")?;
        let telegram_chat_id = require_var("TELEGRAM_CHAT_ID")?;

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
        })
    }
}

fn require_var(name: &str) -> crate::Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => {
            tracing::error!("Required environment variable {} is not set", name);
            Err(crate::HomeworkBotError::Config(format!(
                "{} must be set",
                name
            )))
        }
    }
}
