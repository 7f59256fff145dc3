use serde::{Deserialize, Serialize};

/// A single chat message. The gateway never inspects its shape; in practice
/// it holds `role` and `content`.
pub type ChatMessage = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
