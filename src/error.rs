// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::services::responder::ReplyError;

/// Everything a request handler can fail with. The display strings are the
/// exact bodies clients see; upstream detail stays in the server log.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Please provide a valid message.")]
    InvalidMessage,

    #[error("API key not configured. Please create a .env file with HUGGINGFACE_API_KEY=your_api_key_here")]
    ApiKeyMissing,

    #[error("Something went wrong with Hugging Face API.")]
    Upstream(#[source] ReplyError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidMessage => StatusCode::BAD_REQUEST,
            AppError::ApiKeyMissing | AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Upstream(source) = &self {
            tracing::error!("❌ Hugging Face error: {source}");
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
