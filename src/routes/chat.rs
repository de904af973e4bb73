use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let Some(message) = payload.message_text() else {
        return Err(AppError::InvalidMessage);
    };

    tracing::info!("🟦 User said: {message}");

    if !state.config.api_key_configured() {
        tracing::error!("❌ HUGGINGFACE_API_KEY not found in environment variables");
        return Err(AppError::ApiKeyMissing);
    }

    let reply = state
        .responder
        .generate_reply()
        .await
        .map_err(AppError::Upstream)?;

    tracing::info!("🤖 Bot replied: {reply}");
    Ok(Json(ChatResponse { reply }))
}
