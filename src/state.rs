//! Poll state and error deduplication

use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

/// Mutable state of the polling loop, owned by the engine
#[derive(Debug)]
pub struct PollState {
    /// Unix timestamp (seconds) passed as `from_date` on the next fetch
    pub last_timestamp: u64,
    /// Raw body of the last fetched response, `None` before the first fetch
    pub last_response: Option<Value>,
}

impl PollState {
    pub fn new() -> Self {
        Self {
            last_timestamp: current_epoch_secs(),
            last_response: None,
        }
    }

    /// Store `response` as the most recent one, returning true when it
    /// differs from the previously stored response.
    ///
    /// The new response is stored before the caller inspects it, so a
    /// payload that later fails formatting is not treated as changed
    /// again on the next cycle.
    pub fn record_response(&mut self, response: &Value) -> bool {
        let changed = self.last_response.as_ref() != Some(response);
        if changed {
            self.last_response = Some(response.clone());
        }
        changed
    }

    /// Advance `last_timestamp` to the current time
    pub fn touch(&mut self) {
        self.last_timestamp = current_epoch_secs();
    }
}

impl Default for PollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Error message texts already forwarded to the user.
///
/// Append-only for the process lifetime; unbounded growth is accepted.
#[derive(Debug, Default)]
pub struct SeenErrors {
    messages: HashSet<String>,
}

impl SeenErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message`, returning true when it has not been seen before
    pub fn first_occurrence(&mut self, message: &str) -> bool {
        self.messages.insert(message.to_string())
    }
}

fn current_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
