//! # Event System
//!
//! Gateway event handlers and their registry.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod handler;
pub mod message;
pub mod reaction;
pub mod registry;

pub use handler::{Actor, Event, EventKind, EventPayload, ReactionInfo};
pub use message::MessageEvent;
pub use reaction::ReactionEvent;
pub use registry::EventRegistry;
