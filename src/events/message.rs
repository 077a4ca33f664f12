//! # Message Event
//!
//! Routes chat messages: prefixed messages go to the command registry,
//! everything else is relayed onto the pub/sub channel when a relay is
//! configured. Messages from bot accounts are dropped.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial prefix command routing and message relay

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, error, info};
use std::sync::Arc;

use super::handler::{Event, EventKind, EventPayload};
use crate::commands::{create_all_handlers, CommandRegistry, IncomingMessage};
use crate::messaging::{MessageQueue, RELAY_CHANNEL};

pub struct MessageEvent {
    prefix: String,
    commands: CommandRegistry,
    relay: Option<Arc<dyn MessageQueue>>,
}

impl MessageEvent {
    /// Create the event with every built-in command registered
    pub fn new(prefix: impl Into<String>, relay: Option<Arc<dyn MessageQueue>>) -> Self {
        let prefix = prefix.into();

        info!("Registering commands...");
        let mut commands = CommandRegistry::new();
        for handler in create_all_handlers(&prefix) {
            commands.register(handler);
        }

        Self::with_registry(prefix, commands, relay)
    }

    pub fn with_registry(
        prefix: impl Into<String>,
        commands: CommandRegistry,
        relay: Option<Arc<dyn MessageQueue>>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            commands,
            relay,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    async fn handle_message(&self, message: &dyn IncomingMessage) -> Result<()> {
        let content = message.content();
        info!("Message received! {}: {}", message.author_tag(), content);

        if message.author_is_bot() {
            return Ok(());
        }

        if content.starts_with(self.prefix.as_str()) {
            return self.commands.dispatch(message).await;
        }

        if let Some(relay) = &self.relay {
            match relay.publish(RELAY_CHANNEL, content).await {
                Ok(()) => debug!("Relayed message to {RELAY_CHANNEL}"),
                Err(e) => error!("Failed to relay message: {e:#}"),
            }
        }

        Ok(())
    }
}

#[async_trait]
impl Event for MessageEvent {
    fn kind(&self) -> EventKind {
        EventKind::MessageCreate
    }

    async fn handle(&self, payload: EventPayload) -> Result<()> {
        match payload {
            EventPayload::Message(message) => self.handle_message(message.as_ref()).await,
            other => {
                debug!("Message event ignoring {} payload", other.kind());
                Ok(())
            }
        }
    }
}
