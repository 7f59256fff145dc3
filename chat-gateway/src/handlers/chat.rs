use axum::{extract::State, Json};
use service_core::error::AppError;

use crate::{
    dtos::{ChatRequest, ChatResponse},
    services::metrics::record_upstream,
    AppState,
};

/// Forward the caller's messages upstream and return the first answer.
///
/// Upstream failures come back with the upstream's own status and body.
pub async fn groq_chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    tracing::info!(
        message_count = payload.messages.len(),
        "Forwarding chat completion"
    );

    let response = state
        .provider
        .complete(&payload.messages)
        .await
        .map_err(|e| {
            record_upstream(e.outcome());
            tracing::error!(error = %e, "Chat completion failed");
            AppError::from(e)
        })?;

    record_upstream("success");

    Ok(Json(ChatResponse { response }))
}
