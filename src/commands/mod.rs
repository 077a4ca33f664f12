//! # Command System
//!
//! Prefix command (`/ping`, `/ban`, ...) handling for chat messages.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial handler trait, context and registry

pub mod context;
pub mod handler;
pub mod handlers;
pub mod registry;

// Re-export handler infrastructure
pub use context::IncomingMessage;
pub use handler::{Command, CommandName};
pub use handlers::{create_all_handlers, CannedReplyHandler};
pub use registry::CommandRegistry;
