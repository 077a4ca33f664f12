//! Utility command handlers
//!
//! Handles: ping

use super::CannedReplyHandler;
use crate::commands::handler::CommandName;

pub const PING_REPLY: &str = "Pong!";

/// Liveness check
pub fn ping(prefix: &str) -> CannedReplyHandler {
    CannedReplyHandler::new(CommandName::Ping, prefix, PING_REPLY)
}
