//! Notifier trait for delivering user-facing messages

use async_trait::async_trait;

/// Trait for sending messages to the user.
///
/// Delivery is best effort: implementations log the outcome and never
/// surface transport failures to the caller, so a failed send can not
/// interrupt the polling loop.
#[async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// Send `message` to the configured destination
    async fn notify(&self, message: &str);
}
