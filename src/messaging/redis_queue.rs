//! # Redis Message Queue
//!
//! `MessageQueue` backed by Redis pub/sub.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//!
//! ## Changelog
//! - 1.0.0: Initial publish/subscribe over separate connections

use anyhow::{Context, Result};
use async_trait::async_trait;
use futures_util::StreamExt;
use log::{debug, error, info, warn};
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use super::queue::{deliver, MessageQueue, SubscriptionCallback};

/// Redis pub/sub client.
///
/// Publishing shares one multiplexed connection. Each subscription gets a
/// dedicated connection, because a Redis connection in subscribe mode
/// cannot issue other commands.
#[derive(Clone)]
pub struct RedisMessageQueue {
    client: redis::Client,
    publisher: MultiplexedConnection,
}

impl RedisMessageQueue {
    /// Open the publisher connection. Fails if the broker is unreachable.
    pub async fn connect(url: &str) -> Result<Self> {
        let client =
            redis::Client::open(url).with_context(|| format!("Invalid Redis URL {url}"))?;
        let publisher = client
            .get_multiplexed_tokio_connection()
            .await
            .context("Redis publisher connection error")?;

        info!("Connected to Redis at {url}");
        Ok(Self { client, publisher })
    }
}

#[async_trait]
impl MessageQueue for RedisMessageQueue {
    async fn publish(&self, channel: &str, payload: &str) -> Result<()> {
        let mut conn = self.publisher.clone();
        conn.publish::<_, _, ()>(channel, payload)
            .await
            .with_context(|| format!("Failed to publish to {channel}"))?;

        debug!("Published {} bytes to {channel}", payload.len());
        Ok(())
    }

    async fn subscribe(&self, channel: &str, callback: SubscriptionCallback) -> Result<()> {
        let mut pubsub = self
            .client
            .get_async_pubsub()
            .await
            .context("Redis subscriber connection error")?;
        pubsub
            .subscribe(channel)
            .await
            .with_context(|| format!("Failed to subscribe to {channel}"))?;

        info!("Subscribed to {channel}");

        let channel = channel.to_string();
        tokio::spawn(async move {
            let mut messages = Box::pin(pubsub.into_on_message());
            while let Some(msg) = messages.next().await {
                match msg.get_payload::<String>() {
                    Ok(payload) => deliver(&channel, &callback, payload),
                    Err(e) => error!("Undecodable payload on {channel}: {e}"),
                }
            }
            warn!("Subscription to {channel} closed");
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_connect_to_unreachable_broker_fails() {
        // Port 1 is never a Redis server.
        let result = RedisMessageQueue::connect("redis://127.0.0.1:1/").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_connect_rejects_invalid_url() {
        let result = RedisMessageQueue::connect("not a url").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    #[ignore = "requires a Redis server on localhost:6379"]
    async fn test_publish_reaches_subscriber() {
        let queue = RedisMessageQueue::connect("redis://127.0.0.1:6379/")
            .await
            .unwrap();

        let (tx, mut rx) = mpsc::unbounded_channel();
        let callback: SubscriptionCallback = Arc::new(move |payload: String| {
            tx.send(payload)?;
            Ok(())
        });
        queue.subscribe("disco.test", callback).await.unwrap();

        queue.publish("disco.test", "hello").await.unwrap();

        let received = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap();
        assert_eq!(received.as_deref(), Some("hello"));
    }
}
