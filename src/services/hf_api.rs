// src/services/hf_api.rs
//
// Thin client for the Hugging Face inference API. Only the diagnostic probe
// binary talks to the provider; the chat endpoint never does.
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/microsoft/DialoGPT-medium";

#[derive(Debug, Serialize)]
pub struct GenerationRequest {
    pub inputs: String,
    pub parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub do_sample: bool,
    pub return_full_text: bool,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_new_tokens: 50,
            temperature: 0.7,
            do_sample: true,
            return_full_text: false,
        }
    }
}

/// What the inference endpoint answers with: generated text once the model is
/// warm, or a loading notice with an ETA while it spins up.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GenerationResponse {
    Generated(Vec<GeneratedText>),
    Loading { estimated_time: f64 },
}

#[derive(Debug, Deserialize)]
pub struct GeneratedText {
    pub generated_text: String,
}

#[derive(Debug, Error)]
pub enum HfError {
    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

pub struct HfClient {
    client: reqwest::Client,
    api_key: String,
}

impl HfClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Send one generation request and return the status plus the raw JSON
    /// body, so callers can print it verbatim before interpreting it.
    pub async fn generate(&self, prompt: &str) -> Result<(u16, Value), HfError> {
        let request = GenerationRequest {
            inputs: prompt.to_string(),
            parameters: GenerationParameters::default(),
        };

        let response = self
            .client
            .post(MODEL_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HfError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.json::<Value>().await?;
        Ok((status.as_u16(), body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_to_the_wire_shape() {
        let request = GenerationRequest {
            inputs: "Hello, how are you?".to_string(),
            parameters: GenerationParameters::default(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "inputs": "Hello, how are you?",
                "parameters": {
                    "max_new_tokens": 50,
                    "temperature": 0.7,
                    "do_sample": true,
                    "return_full_text": false,
                }
            })
        );
    }

    #[test]
    fn generated_array_parses() {
        let value = json!([{ "generated_text": "I'm fine, thanks!" }]);
        match serde_json::from_value::<GenerationResponse>(value).unwrap() {
            GenerationResponse::Generated(items) => {
                assert_eq!(items[0].generated_text, "I'm fine, thanks!");
            }
            other => panic!("expected generated text, got {other:?}"),
        }
    }

    #[test]
    fn loading_notice_parses() {
        let value = json!({ "estimated_time": 20.5 });
        match serde_json::from_value::<GenerationResponse>(value).unwrap() {
            GenerationResponse::Loading { estimated_time } => {
                assert_eq!(estimated_time, 20.5);
            }
            other => panic!("expected loading notice, got {other:?}"),
        }
    }

    #[test]
    fn unexpected_format_is_an_error() {
        let value = json!({ "error": "rate limited" });
        assert!(serde_json::from_value::<GenerationResponse>(value).is_err());
    }
}
