//! Chat-completion provider abstraction.
//!
//! The HTTP handler talks to a `ChatProvider`; `groq` is the real upstream,
//! `mock` is a scripted stand-in for tests.

pub mod groq;
pub mod mock;

use crate::dtos::ChatMessage;
use async_trait::async_trait;
use axum::http::StatusCode;
use service_core::error::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    /// The upstream answered with a non-200 status.
    #[error("Upstream error {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Short label for metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            ProviderError::Upstream { .. } => "upstream_error",
            ProviderError::Network(_) => "network_error",
            ProviderError::InvalidResponse(_) => "invalid_response",
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Upstream { status, body } => AppError::Upstream { status, body },
            ProviderError::Network(msg) => AppError::BadGateway(msg),
            ProviderError::InvalidResponse(msg) => AppError::BadGateway(msg),
        }
    }
}

#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Run one non-streaming completion and return the first choice's text.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ProviderError>;
}
