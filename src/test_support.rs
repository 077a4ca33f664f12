//! Shared test doubles

use anyhow::{bail, Result};
use async_trait::async_trait;
use std::sync::Mutex;

use crate::commands::IncomingMessage;

/// In-memory message that records every reply sent to it.
pub struct FakeMessage {
    pub author: String,
    pub is_bot: bool,
    pub content: String,
    pub fail_replies: bool,
    replies: Mutex<Vec<String>>,
}

impl FakeMessage {
    pub fn new(content: &str) -> Self {
        Self {
            author: "tester#0001".to_string(),
            is_bot: false,
            content: content.to_string(),
            fail_replies: false,
            replies: Mutex::new(Vec::new()),
        }
    }

    pub fn from_bot(content: &str) -> Self {
        Self {
            is_bot: true,
            ..Self::new(content)
        }
    }

    pub fn failing(content: &str) -> Self {
        Self {
            fail_replies: true,
            ..Self::new(content)
        }
    }

    pub fn replies(&self) -> Vec<String> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl IncomingMessage for FakeMessage {
    fn author_tag(&self) -> String {
        self.author.clone()
    }

    fn author_is_bot(&self) -> bool {
        self.is_bot
    }

    fn content(&self) -> &str {
        &self.content
    }

    async fn reply(&self, text: &str) -> Result<()> {
        if self.fail_replies {
            bail!("Missing Permissions");
        }
        self.replies.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
