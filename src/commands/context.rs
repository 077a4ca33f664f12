//! Incoming chat message contract
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation, decoupled from serenity types

use anyhow::Result;
use async_trait::async_trait;

/// A chat message as seen by events and commands.
///
/// The gateway adapter wraps serenity's `Message` in this trait so that
/// dispatch logic can be exercised without a live Discord session.
#[async_trait]
pub trait IncomingMessage: Send + Sync {
    /// Display tag of the author, used for logging
    fn author_tag(&self) -> String;

    /// Whether the author is a bot account
    fn author_is_bot(&self) -> bool;

    /// Raw text content of the message
    fn content(&self) -> &str;

    /// Send a reply referencing this message
    async fn reply(&self, text: &str) -> Result<()>;
}
