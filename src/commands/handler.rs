//! Command handler trait and command keys
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation for prefix command handling

use anyhow::Result;
use async_trait::async_trait;
use std::fmt;

use super::context::IncomingMessage;

/// Every command the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
    Ping,
    Mute,
    Ban,
    Kick,
}

impl CommandName {
    pub const ALL: [CommandName; 4] = [
        CommandName::Ping,
        CommandName::Mute,
        CommandName::Ban,
        CommandName::Kick,
    ];

    /// The trigger token typed after the prefix
    pub fn token(self) -> &'static str {
        match self {
            CommandName::Ping => "ping",
            CommandName::Mute => "mute",
            CommandName::Ban => "ban",
            CommandName::Kick => "kick",
        }
    }

    /// Resolve a trigger token. Tokens are case-sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.token() == token)
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Trait for prefix command handlers
///
/// Handlers are registered with a `CommandRegistry` under `name()` and
/// dispatched from the first token of a message.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// #[async_trait]
/// impl Command for PingHandler {
///     fn name(&self) -> CommandName {
///         CommandName::Ping
///     }
///
///     async fn handle(&self, message: &dyn IncomingMessage) -> Result<()> {
///         message.reply("Pong!").await
///     }
/// }
/// ```
#[async_trait]
pub trait Command: Send + Sync {
    /// Registry key for this handler
    fn name(&self) -> CommandName;

    /// Handle a message whose first token resolved to `name()`
    ///
    /// An `Err` means the reply could not be sent.
    async fn handle(&self, message: &dyn IncomingMessage) -> Result<()>;
}
