//! Command handler registry
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation for handler dispatch

use anyhow::Result;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

use super::context::IncomingMessage;
use super::handler::{Command, CommandName};

/// Registry mapping command names to handlers
///
/// Each name maps to at most one handler. Registering a second handler
/// under the same name replaces the first.
///
/// # Example
///
/// ```ignore
/// let mut registry = CommandRegistry::new();
/// registry.register(Arc::new(utility::ping("/")));
///
/// registry.dispatch(&message).await?;
/// ```
#[derive(Clone)]
pub struct CommandRegistry {
    handlers: HashMap<CommandName, Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler under its name, replacing any previous one
    pub fn register(&mut self, handler: Arc<dyn Command>) {
        self.handlers.insert(handler.name(), handler);
    }

    /// Get handler for a command name
    pub fn get(&self, name: CommandName) -> Option<Arc<dyn Command>> {
        self.handlers.get(&name).cloned()
    }

    /// Check if a command is registered
    pub fn contains(&self, name: CommandName) -> bool {
        self.handlers.contains_key(&name)
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Route a message to the handler named by its first token.
    ///
    /// The first whitespace-delimited token has exactly one leading
    /// character (the prefix) removed before lookup. Unknown or
    /// unregistered tokens are ignored.
    pub async fn dispatch(&self, message: &dyn IncomingMessage) -> Result<()> {
        let Some(token) = command_token(message.content()) else {
            return Ok(());
        };

        let Some(handler) = CommandName::from_token(token).and_then(|name| self.get(name)) else {
            debug!("No command registered for {token:?}");
            return Ok(());
        };

        handler.handle(message).await
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// First token of `raw_text` without its leading character
fn command_token(raw_text: &str) -> Option<&str> {
    let first = raw_text.split_whitespace().next()?;
    let mut chars = first.chars();
    chars.next()?;
    Some(chars.as_str())
}
