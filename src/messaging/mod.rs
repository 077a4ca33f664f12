//! # Messaging
//!
//! Pub/sub relay of chat messages to external consumers.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0
//! - **Toggleable**: true (`RELAY_ENABLED`)

#[cfg(test)]
pub mod mock;
pub mod queue;
pub mod redis_queue;

pub use queue::{MessageQueue, SubscriptionCallback, RELAY_CHANNEL};
pub use redis_queue::RedisMessageQueue;
