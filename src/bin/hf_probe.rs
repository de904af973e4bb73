//! One-shot probe for the Hugging Face inference API. Sends a fixed prompt
//! and prints the raw result for manual inspection; run with
//! `cargo run --bin hf_probe`.

use std::env;

use hf_chat_backend::services::hf_api::{GenerationResponse, HfClient, HfError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    println!("🔍 Testing Hugging Face API...");

    let Some(api_key) = env::var("HUGGINGFACE_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
    else {
        eprintln!("❌ HUGGINGFACE_API_KEY not found in .env file");
        println!("💡 Please create a .env file with: HUGGINGFACE_API_KEY=your_api_key_here");
        return Ok(());
    };

    println!("✅ API key found");
    println!("🔄 Sending test request...");

    let client = HfClient::new(api_key);
    match client.generate("Hello, how are you?").await {
        Ok((status, data)) => {
            println!("📊 Response status: {status}");
            println!("📄 Raw response: {}", serde_json::to_string_pretty(&data)?);

            match serde_json::from_value::<GenerationResponse>(data.clone()) {
                Ok(GenerationResponse::Generated(items)) if !items.is_empty() => {
                    println!("✅ Success! Bot response: {}", items[0].generated_text);
                }
                Ok(GenerationResponse::Loading { estimated_time }) => {
                    println!("⏳ Model is loading, estimated time: {estimated_time}");
                }
                _ => {
                    println!("❓ Unexpected response format: {data}");
                }
            }
        }
        Err(HfError::Api { status, body }) => {
            eprintln!("❌ API Error: {status} {body}");
        }
        Err(err) => {
            eprintln!("❌ Error: {err}");
        }
    }

    Ok(())
}
