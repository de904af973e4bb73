use axum::{Json, extract::State};
use chrono::{SecondsFormat, Utc};

use crate::{message::HealthResponse, state::SharedState};

/// Fixed-shape status document; a pure read of process configuration.
pub async fn health_handler(State(state): State<SharedState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        api_key_configured: state.config.api_key_configured(),
    })
}
