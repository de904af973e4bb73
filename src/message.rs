// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /chat`. The field is kept as a raw JSON value so that a
/// missing, null, or non-string `message` reaches our validation (and its
/// fixed 400 body) instead of being bounced by the deserializer.
#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<Value>,
}

impl ChatRequest {
    /// The trimmed message text, if the payload carried a usable one.
    pub fn message_text(&self) -> Option<&str> {
        match &self.message {
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    #[serde(rename = "apiKeyConfigured")]
    pub api_key_configured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ChatRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn message_text_trims() {
        assert_eq!(parse(r#"{"message": "  hi  "}"#).message_text(), Some("hi"));
    }

    #[test]
    fn message_text_rejects_unusable_payloads() {
        assert_eq!(parse(r#"{"message": ""}"#).message_text(), None);
        assert_eq!(parse(r#"{"message": "   "}"#).message_text(), None);
        assert_eq!(parse(r#"{"message": null}"#).message_text(), None);
        assert_eq!(parse(r#"{"message": 42}"#).message_text(), None);
        assert_eq!(parse(r#"{}"#).message_text(), None);
    }
}
