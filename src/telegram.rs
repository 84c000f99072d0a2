//! Telegram notification client

use std::sync::Arc;

use async_trait::async_trait;

use crate::io::HttpClient;
use crate::notifier::Notifier;

const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Telegram Bot API message sender
pub struct TelegramNotifier {
    token: String,
    chat_id: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl TelegramNotifier {
    pub fn new(token: &str, chat_id: &str, http: Arc<dyn HttpClient>) -> Self {
        tracing::debug!("Created TelegramNotifier for chat '{}'", chat_id);

        Self {
            token: token.to_string(),
            chat_id: chat_id.to_string(),
            http,
        }
    }

    async fn send_message(&self, text: &str) -> crate::Result<()> {
        let url = format!("{}/bot{}/sendMessage", TELEGRAM_API_URL, self.token);
        let params = [("chat_id", self.chat_id.as_str()), ("text", text)];

        let response = self.http.post_form(&url, &params).await?;

        if response.status != 200 {
            return Err(crate::HomeworkBotError::Notifier(format!(
                "Telegram API returned status {}: {}",
                response.status, response.body
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, message: &str) {
        match self.send_message(message).await {
            Ok(()) => tracing::info!("Sent message: {}", message),
            Err(e) => tracing::error!("Failed to send message '{}': {}", message, e),
        }
    }
}
