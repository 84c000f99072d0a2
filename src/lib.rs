//! Homework bot: polls the Yandex Practicum homework status API and
//! announces review status changes over Telegram.

pub mod config;
pub mod engine;
pub mod error;
pub mod io;
pub mod notifier;
pub mod practicum;
pub mod response;
pub mod state;
pub mod telegram;
pub mod verdict;

pub use config::{load_config, Config, Credentials};
pub use error::{HomeworkBotError, Result};

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::engine::Engine;
use crate::io::{HttpClient, ReqwestHttpClient};
use crate::notifier::Notifier;
use crate::practicum::PracticumClient;
use crate::telegram::TelegramNotifier;

/// Wire up the HTTP client, status client, and notifier, then poll until
/// a shutdown signal arrives.
pub async fn run(config: Config, credentials: Credentials) -> Result<()> {
    let cancellation_token = CancellationToken::new();

    let signal_token = cancellation_token.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for ctrl-c");
        tracing::info!("Shutdown signal received");
        signal_token.cancel();
    });

    let http_client: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::default());
    let client = PracticumClient::new(
        &config.endpoint,
        &credentials.practicum_token,
        http_client.clone(),
    );
    let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::new(
        &credentials.telegram_token,
        &credentials.telegram_chat_id,
        http_client,
    ));

    let mut engine = Engine::new(
        client,
        notifier,
        Duration::from_secs(config.poll_interval_seconds),
        cancellation_token,
    );
    engine.run().await;

    tracing::info!("Homework bot stopped");
    Ok(())
}
