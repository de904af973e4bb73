// src/config.rs
use std::env;

/// Process configuration, read once at startup and passed into handlers
/// through the shared state. Handlers never touch the environment directly.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub huggingface_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            huggingface_api_key: env::var("HUGGINGFACE_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
        })
    }

    pub fn api_key_configured(&self) -> bool {
        self.huggingface_api_key.is_some()
    }
}
