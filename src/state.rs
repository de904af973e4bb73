// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::responder::MockResponder;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub responder: MockResponder,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            responder: MockResponder::new(),
        }
    }

    /// Build state with a custom responder, so tests can pin the reply
    /// selection and drop the artificial delay.
    pub fn with_responder(config: Config, responder: MockResponder) -> Self {
        Self { config, responder }
    }
}
