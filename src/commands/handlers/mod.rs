//! Per-command handler implementations
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial ping and moderation commands

pub mod moderation;
pub mod utility;

use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::context::IncomingMessage;
use super::handler::{Command, CommandName};

/// A command that answers with a fixed reply.
///
/// Only the bare command is accepted: `"/ban"` replies, `"/ban @user"` does
/// not. Arguments are not parsed.
pub struct CannedReplyHandler {
    name: CommandName,
    prefix: String,
    reply: &'static str,
}

impl CannedReplyHandler {
    pub fn new(name: CommandName, prefix: impl Into<String>, reply: &'static str) -> Self {
        Self {
            name,
            prefix: prefix.into(),
            reply,
        }
    }

    pub fn reply_text(&self) -> &'static str {
        self.reply
    }

    /// True iff the trimmed text is exactly `{prefix}{token}`
    pub fn matches(&self, raw_text: &str) -> bool {
        raw_text
            .trim()
            .strip_prefix(self.prefix.as_str())
            .is_some_and(|rest| rest == self.name.token())
    }
}

#[async_trait]
impl Command for CannedReplyHandler {
    fn name(&self) -> CommandName {
        self.name
    }

    async fn handle(&self, message: &dyn IncomingMessage) -> Result<()> {
        if !self.matches(message.content()) {
            debug!("{} not an exact match, no reply sent", self.name);
            return Ok(());
        }
        message.reply(self.reply).await
    }
}

/// Create all registered command handlers
///
/// Returns a vector of handlers ready to be registered with CommandRegistry.
pub fn create_all_handlers(prefix: &str) -> Vec<Arc<dyn Command>> {
    vec![
        Arc::new(utility::ping(prefix)),
        Arc::new(moderation::mute(prefix)),
        Arc::new(moderation::ban(prefix)),
        Arc::new(moderation::kick(prefix)),
    ]
}
