//! Gateway event handler trait and payload types
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::commands::IncomingMessage;

/// Gateway events the bot reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    MessageCreate,
    MessageReactionAdd,
}

impl EventKind {
    pub const ALL: [EventKind; 2] = [EventKind::MessageCreate, EventKind::MessageReactionAdd];

    /// Gateway-facing event name
    pub fn name(self) -> &'static str {
        match self {
            EventKind::MessageCreate => "messageCreate",
            EventKind::MessageReactionAdd => "messageReactionAdd",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The user who added a reaction. Only the id is guaranteed; the name is
/// present when the user was cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: u64,
    pub name: Option<String>,
}

/// A reaction added to a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionInfo {
    pub emoji: String,
    pub message_id: u64,
    pub channel_id: u64,
    pub guild_id: Option<u64>,
}

/// Input delivered to an event handler
#[derive(Clone)]
pub enum EventPayload {
    Message(Arc<dyn IncomingMessage>),
    Reaction {
        reaction: ReactionInfo,
        actor: Option<Actor>,
    },
}

impl EventPayload {
    pub fn kind(&self) -> EventKind {
        match self {
            EventPayload::Message(_) => EventKind::MessageCreate,
            EventPayload::Reaction { .. } => EventKind::MessageReactionAdd,
        }
    }
}

/// Trait for gateway event handlers
///
/// Handlers are registered with an `EventRegistry` under `kind()` and
/// receive every payload of that kind.
#[async_trait]
pub trait Event: Send + Sync {
    fn kind(&self) -> EventKind;

    async fn handle(&self, payload: EventPayload) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeMessage;

    fn _assert_object_safe(_: &dyn Event) {}

    #[test]
    fn test_event_names() {
        assert_eq!(EventKind::MessageCreate.name(), "messageCreate");
        assert_eq!(EventKind::MessageReactionAdd.name(), "messageReactionAdd");
        assert_eq!(EventKind::from_name("messageCreate"), Some(EventKind::MessageCreate));
        assert_eq!(EventKind::from_name("guildCreate"), None);
    }

    #[test]
    fn test_payload_kind() {
        let message = EventPayload::Message(Arc::new(FakeMessage::new("hi")));
        assert_eq!(message.kind(), EventKind::MessageCreate);

        let reaction = EventPayload::Reaction {
            reaction: ReactionInfo {
                emoji: "👍".to_string(),
                message_id: 1,
                channel_id: 2,
                guild_id: None,
            },
            actor: None,
        };
        assert_eq!(reaction.kind(), EventKind::MessageReactionAdd);
    }
}
