//! Mock provider for testing.

use super::{ChatProvider, ProviderError};
use crate::dtos::ChatMessage;
use async_trait::async_trait;
use axum::http::StatusCode;
use std::sync::Mutex;

enum Reply {
    Content(String),
    Upstream(StatusCode, String),
}

/// Scripted provider that remembers every message list it was given.
pub struct MockChatProvider {
    reply: Reply,
    received: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockChatProvider {
    pub fn replying(content: impl Into<String>) -> Self {
        Self {
            reply: Reply::Content(content.into()),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            reply: Reply::Upstream(status, body.into()),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<Vec<ChatMessage>> {
        self.received
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        if let Ok(mut calls) = self.received.lock() {
            calls.push(messages.to_vec());
        }

        match &self.reply {
            Reply::Content(text) => Ok(text.clone()),
            Reply::Upstream(status, body) => Err(ProviderError::Upstream {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}
