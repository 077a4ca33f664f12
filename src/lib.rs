// Core layer - configuration and logging
pub mod core;

// Command layer - prefix commands and their registry
pub mod commands;

// Event layer - gateway events and their registry
pub mod events;

// Messaging layer - pub/sub relay
pub mod messaging;

// Session layer - gateway connection and routing
pub mod bot;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::bot::Bot;
pub use crate::core::Config;
