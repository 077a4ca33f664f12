//! Event handler registry
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use std::collections::HashMap;
use std::sync::Arc;

use super::handler::{Event, EventKind};

/// Registry mapping gateway event kinds to handlers
///
/// Same shape as `CommandRegistry`: at most one handler per kind, and
/// registering again replaces the previous handler.
#[derive(Clone, Default)]
pub struct EventRegistry {
    events: HashMap<EventKind, Arc<dyn Event>>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, event: Arc<dyn Event>) {
        self.events.insert(event.kind(), event);
    }

    pub fn get(&self, kind: EventKind) -> Option<Arc<dyn Event>> {
        self.events.get(&kind).cloned()
    }

    /// Look up by gateway event name. Unknown names are simply not found.
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn Event>> {
        EventKind::from_name(name).and_then(|kind| self.get(kind))
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
