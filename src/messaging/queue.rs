//! Pub/sub contract used by the message relay

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Channel that non-command chat messages are relayed onto
pub const RELAY_CHANNEL: &str = "discord.messages";

/// Receives each payload delivered on a subscribed channel.
///
/// Errors are logged by the queue and never end the subscription.
pub type SubscriptionCallback = Arc<dyn Fn(String) -> Result<()> + Send + Sync>;

/// Trait for publishing to and subscribing from a pub/sub broker.
/// Implemented by `RedisMessageQueue` (real broker) and `MockMessageQueue`
/// (in-memory, tests).
///
/// Both operations report failure to the caller, which decides whether to
/// log and continue.
#[async_trait]
pub trait MessageQueue: Send + Sync {
    /// Publish a payload on a channel
    async fn publish(&self, channel: &str, payload: &str) -> Result<()>;

    /// Deliver every future payload on `channel` to `callback`
    async fn subscribe(&self, channel: &str, callback: SubscriptionCallback) -> Result<()>;
}

/// Hand one payload to a subscriber, containing any failure.
pub(crate) fn deliver(channel: &str, callback: &SubscriptionCallback, payload: String) {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| callback(payload))) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => log::error!("Subscriber callback for {channel} failed: {e:#}"),
        Err(_) => log::error!("Subscriber callback for {channel} panicked"),
    }
}
