// src/routes/mod.rs
pub mod chat;
pub mod health;

use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use health::health_handler;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::SharedState;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/chat", post(chat_handler))
        .route("/health", get(health_handler))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}
