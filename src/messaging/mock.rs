//! In-memory mock queue for unit testing without a real broker.

use anyhow::{bail, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::queue::{deliver, MessageQueue, SubscriptionCallback};

/// Captured publish: (channel, payload)
pub type CapturedMessage = (String, String);

/// In-memory queue that records all published messages and hands them to
/// any subscriber of the same channel.
///
/// # Example
/// ```rust,ignore
/// let mock = MockMessageQueue::new();
/// event.handle(payload).await.unwrap();
/// assert_eq!(mock.published_messages()[0].1, "hello");
/// ```
#[derive(Clone, Default)]
pub struct MockMessageQueue {
    messages: Arc<Mutex<Vec<CapturedMessage>>>,
    subscribers: Arc<Mutex<Vec<(String, SubscriptionCallback)>>>,
    failing: Arc<AtomicBool>,
}

impl MockMessageQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent publish/subscribe fail
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Return a snapshot of all captured (channel, payload) pairs in publish order.
    pub fn published_messages(&self) -> Vec<CapturedMessage> {
        self.messages.lock().unwrap().clone()
    }

    pub fn message_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    pub fn subscription_count(&self) -> usize {
        self.subscribers.lock().unwrap().len()
    }
}

#[async_trait]
impl MessageQueue for MockMessageQueue {
    async fn publish(&self, channel: &str, payload: &str) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            bail!("Connection refused");
        }
        self.messages
            .lock()
            .unwrap()
            .push((channel.to_string(), payload.to_string()));

        let subscribers: Vec<SubscriptionCallback> = self
            .subscribers
            .lock()
            .unwrap()
            .iter()
            .filter(|(subscribed, _)| subscribed == channel)
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in &subscribers {
            deliver(channel, callback, payload.to_string());
        }
        Ok(())
    }

    async fn subscribe(&self, channel: &str, callback: SubscriptionCallback) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            bail!("Connection refused");
        }
        self.subscribers
            .lock()
            .unwrap()
            .push((channel.to_string(), callback));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_delivers_only_to_matching_channel() {
        let queue = MockMessageQueue::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let sink = received.clone();
        queue
            .subscribe(
                "a",
                Arc::new(move |payload: String| {
                    sink.lock().unwrap().push(payload);
                    Ok(())
                }),
            )
            .await
            .unwrap();

        queue.publish("a", "one").await.unwrap();
        queue.publish("b", "two").await.unwrap();

        assert_eq!(*received.lock().unwrap(), vec!["one".to_string()]);
        assert_eq!(queue.message_count(), 2);
    }

    #[tokio::test]
    async fn test_failing_subscriber_does_not_break_publish() {
        let queue = MockMessageQueue::new();
        queue
            .subscribe("a", Arc::new(|_payload: String| -> Result<()> { bail!("bug") }))
            .await
            .unwrap();

        assert!(queue.publish("a", "one").await.is_ok());
        assert!(queue.publish("a", "two").await.is_ok());
    }

    #[tokio::test]
    async fn test_fail_all() {
        let queue = MockMessageQueue::new();
        queue.fail_all();
        assert!(queue.publish("a", "one").await.is_err());
        assert!(queue
            .subscribe("a", Arc::new(|_payload: String| -> Result<()> { Ok(()) }))
            .await
            .is_err());
        assert_eq!(queue.message_count(), 0);
        assert_eq!(queue.subscription_count(), 0);
    }
}
