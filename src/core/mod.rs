//! # Core Module
//!
//! Configuration and logging shared by every layer of the bot.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial creation with config and logging modules

pub mod config;
pub mod logging;

// Re-export commonly used items
pub use config::{Config, Environment};
