//! # Reaction Event
//!
//! Receives reactions added to messages. No action is taken yet; this is
//! the hook for reaction-driven moderation.

use anyhow::Result;
use async_trait::async_trait;
use log::debug;

use super::handler::{Actor, Event, EventKind, EventPayload, ReactionInfo};

#[derive(Default)]
pub struct ReactionEvent;

impl ReactionEvent {
    pub fn new() -> Self {
        Self
    }

    async fn handle_reaction(&self, reaction: &ReactionInfo, actor: Option<&Actor>) -> Result<()> {
        let who = actor
            .map(|a| a.name.clone().unwrap_or_else(|| a.id.to_string()))
            .unwrap_or_else(|| "unknown user".to_string());
        debug!(
            "Reaction {} on message {} from {who}",
            reaction.emoji, reaction.message_id
        );
        Ok(())
    }
}

#[async_trait]
impl Event for ReactionEvent {
    fn kind(&self) -> EventKind {
        EventKind::MessageReactionAdd
    }

    async fn handle(&self, payload: EventPayload) -> Result<()> {
        match payload {
            EventPayload::Reaction { reaction, actor } => {
                self.handle_reaction(&reaction, actor.as_ref()).await
            }
            other => {
                debug!("Reaction event ignoring {} payload", other.kind());
                Ok(())
            }
        }
    }
}
