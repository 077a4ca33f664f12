//! # Bot Session
//!
//! Owns the Discord gateway session and routes gateway callbacks to the
//! registered events.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial login, message and reaction routing

use anyhow::{Context as _, Result};
use log::{error, info};
use serenity::async_trait;
use serenity::model::channel::{Message, Reaction};
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::Arc;

use crate::commands::IncomingMessage;
use crate::core::Config;
use crate::events::{
    Actor, EventKind, EventPayload, EventRegistry, MessageEvent, ReactionEvent, ReactionInfo,
};
use crate::messaging::MessageQueue;

/// Gateway intents needed to read message content and reactions
pub fn gateway_intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::DIRECT_MESSAGE_REACTIONS
        | GatewayIntents::MESSAGE_CONTENT
}

pub struct Bot {
    token: String,
    events: EventRegistry,
}

impl Bot {
    /// Create a bot with the message and reaction events registered
    pub fn new(config: &Config, relay: Option<Arc<dyn MessageQueue>>) -> Self {
        let mut events = EventRegistry::new();
        events.register(Arc::new(MessageEvent::new(&config.command_prefix, relay)));
        events.register(Arc::new(ReactionEvent::new()));

        Self::with_events(config.discord_token.clone(), events)
    }

    pub fn with_events(token: impl Into<String>, events: EventRegistry) -> Self {
        Self {
            token: token.into(),
            events,
        }
    }

    pub fn events(&self) -> &EventRegistry {
        &self.events
    }

    /// Route a received message. Returns false if no message event is registered.
    pub async fn on_message(&self, message: Arc<dyn IncomingMessage>) -> bool {
        self.dispatch(EventPayload::Message(message)).await
    }

    /// Route an added reaction. Returns false if no reaction event is registered.
    pub async fn on_reaction(&self, reaction: ReactionInfo, actor: Option<Actor>) -> bool {
        self.dispatch(EventPayload::Reaction { reaction, actor }).await
    }

    async fn dispatch(&self, payload: EventPayload) -> bool {
        let kind = payload.kind();
        let Some(event) = self.events.get(kind) else {
            match kind {
                EventKind::MessageCreate => error!("Message event not found"),
                EventKind::MessageReactionAdd => error!("Reaction event not found"),
            }
            return false;
        };

        if let Err(e) = event.handle(payload).await {
            error!("Error handling {kind} event: {e:#}");
        }
        true
    }

    /// Log in and run the gateway session until it ends.
    ///
    /// Authentication failure is returned as an error; there is no
    /// reconnect or backoff here beyond what serenity does internally.
    pub async fn start(self) -> Result<()> {
        info!("Creating a Discord client...");

        let token = self.token.clone();
        let handler = GatewayHandler { bot: Arc::new(self) };

        let mut client = Client::builder(&token, gateway_intents())
            .event_handler(handler)
            .await
            .map_err(|e| {
                error!("Failed to create Discord client: {e}");
                anyhow::anyhow!("Client creation failed: {}", e)
            })?;

        info!("Connecting to Discord gateway...");
        client
            .start()
            .await
            .context("Discord gateway session failed")?;
        Ok(())
    }
}

/// serenity message paired with the context needed to reply to it
struct GatewayMessage {
    ctx: Context,
    msg: Message,
}

#[async_trait]
impl IncomingMessage for GatewayMessage {
    fn author_tag(&self) -> String {
        self.msg.author.tag()
    }

    fn author_is_bot(&self) -> bool {
        self.msg.author.bot
    }

    fn content(&self) -> &str {
        &self.msg.content
    }

    async fn reply(&self, text: &str) -> Result<()> {
        self.msg.reply(&self.ctx, text).await?;
        Ok(())
    }
}

fn reaction_info(reaction: &Reaction) -> ReactionInfo {
    ReactionInfo {
        emoji: reaction.emoji.to_string(),
        message_id: reaction.message_id.0,
        channel_id: reaction.channel_id.0,
        guild_id: reaction.guild_id.map(|g| g.0),
    }
}

struct GatewayHandler {
    bot: Arc<Bot>,
}

#[async_trait]
impl EventHandler for GatewayHandler {
    async fn message(&self, ctx: Context, msg: Message) {
        self.bot
            .on_message(Arc::new(GatewayMessage { ctx, msg }))
            .await;
    }

    async fn reaction_add(&self, ctx: Context, add_reaction: Reaction) {
        // Only the id is guaranteed; the name comes from the cache if present
        let actor = add_reaction.user_id.map(|user_id| Actor {
            id: user_id.0,
            name: ctx.cache.user(user_id).map(|u| u.name),
        });

        self.bot
            .on_reaction(reaction_info(&add_reaction), actor)
            .await;
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("Discord bot ready! Logged in as {}", ready.user.name);
        info!("Connected to {} guilds", ready.guilds.len());
    }
}
