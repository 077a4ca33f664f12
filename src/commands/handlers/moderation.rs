//! Moderation command handlers
//!
//! Handles: mute, ban, kick
//!
//! These acknowledge the request only. No moderation action is taken
//! against the target user.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0

use super::CannedReplyHandler;
use crate::commands::handler::CommandName;

pub const MUTE_REPLY: &str = "Muting a user!";
pub const BAN_REPLY: &str = "Banning a user!";
pub const KICK_REPLY: &str = "Kicking a user!";

pub fn mute(prefix: &str) -> CannedReplyHandler {
    CannedReplyHandler::new(CommandName::Mute, prefix, MUTE_REPLY)
}

pub fn ban(prefix: &str) -> CannedReplyHandler {
    CannedReplyHandler::new(CommandName::Ban, prefix, BAN_REPLY)
}

pub fn kick(prefix: &str) -> CannedReplyHandler {
    CannedReplyHandler::new(CommandName::Kick, prefix, KICK_REPLY)
}
