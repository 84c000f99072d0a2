//! Engine: the polling loop tying client, validation, and notification together

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::notifier::Notifier;
use crate::practicum::PracticumClient;
use crate::response::extract_homeworks;
use crate::state::{PollState, SeenErrors};
use crate::verdict::format_verdict;

/// The engine polls the status API on a fixed interval, announces status
/// changes, and reports cycle failures at most once per distinct message.
pub struct Engine {
    client: PracticumClient,
    notifier: Arc<dyn Notifier>,
    state: PollState,
    seen_errors: SeenErrors,
    interval: Duration,
    cancel: CancellationToken,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("client", &self.client)
            .field("interval", &self.interval)
            .finish()
    }
}

impl Engine {
    pub fn new(
        client: PracticumClient,
        notifier: Arc<dyn Notifier>,
        interval: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            client,
            notifier,
            state: PollState::new(),
            seen_errors: SeenErrors::new(),
            interval,
            cancel,
        }
    }

    /// Poll until the cancellation token is triggered.
    ///
    /// A failing cycle never ends the loop; the next poll happens one
    /// interval later regardless of the previous outcome.
    pub async fn run(&mut self) {
        loop {
            self.run_once().await;

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = self.cancel.cancelled() => {
                    tracing::debug!("Polling loop cancelled");
                    break;
                }
            }
        }
    }

    /// One poll cycle, cycle-level error handling included.
    ///
    /// Any error from the cycle is rendered once, logged at error
    /// severity, and forwarded to the user only if that exact text has
    /// not been sent before.
    pub async fn run_once(&mut self) {
        if let Err(e) = self.cycle().await {
            let message = format!("failure in program operation: {}", e);
            tracing::error!("{}", message);
            if self.seen_errors.first_occurrence(&message) {
                self.notifier.notify(&message).await;
            }
        }
    }

    async fn cycle(&mut self) -> crate::Result<()> {
        let response = self.client.fetch_updates(self.state.last_timestamp).await?;
        extract_homeworks(&response)?;

        if self.state.record_response(&response) {
            let homeworks = extract_homeworks(&response)?;
            if let Some(first) = homeworks.first() {
                let message = format_verdict(first)?;
                self.notifier.notify(&message).await;
            }
        } else {
            tracing::debug!("No new statuses in the API response");
        }

        self.state.touch();
        Ok(())
    }
}
