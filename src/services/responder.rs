// src/services/responder.rs
use std::time::Duration;

use rand::Rng;
use thiserror::Error;

/// Canned assistant replies. The chat endpoint serves one of these uniformly
/// at random instead of calling the inference API.
pub const MOCK_REPLIES: [&str; 10] = [
    "Hello! I'm your AI assistant. How can I help you today?",
    "That's an interesting question! Let me think about that...",
    "I understand what you're asking. Here's what I think...",
    "Thanks for sharing that with me!",
    "I'm here to help you with any questions you might have.",
    "That's a great point! What else would you like to know?",
    "I'm learning from our conversation. Tell me more!",
    "Interesting perspective! I'd love to hear more about that.",
    "I'm here to chat and help however I can!",
    "That's fascinating! What's on your mind?",
];

/// Simulated inference latency.
pub const RESPONSE_DELAY: Duration = Duration::from_secs(1);

/// Selection strategy for picking a reply. The production picker is random;
/// tests inject a fixed one to make the choice deterministic.
pub trait ReplyPicker: Send + Sync {
    /// Pick an index in `0..len`.
    fn pick(&self, len: usize) -> usize;
}

pub struct RandomPicker;

impl ReplyPicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("no canned replies configured")]
    NoReplies,

    #[error("picker returned index {index} for {len} replies")]
    IndexOutOfRange { index: usize, len: usize },
}

pub struct MockResponder {
    replies: Vec<String>,
    picker: Box<dyn ReplyPicker>,
    delay: Duration,
}

impl MockResponder {
    pub fn new() -> Self {
        Self::with_picker(Box::new(RandomPicker), RESPONSE_DELAY)
    }

    pub fn with_picker(picker: Box<dyn ReplyPicker>, delay: Duration) -> Self {
        Self {
            replies: MOCK_REPLIES.iter().map(|s| s.to_string()).collect(),
            picker,
            delay,
        }
    }

    /// Produce one canned reply after the simulated latency. The sleep
    /// suspends only the calling task; concurrent requests are unaffected.
    pub async fn generate_reply(&self) -> Result<String, ReplyError> {
        if self.replies.is_empty() {
            return Err(ReplyError::NoReplies);
        }

        tokio::time::sleep(self.delay).await;

        let index = self.picker.pick(self.replies.len());
        let reply = self
            .replies
            .get(index)
            .ok_or(ReplyError::IndexOutOfRange {
                index,
                len: self.replies.len(),
            })?
            .clone();

        tracing::debug!("🧠 Mock response generated");
        Ok(reply)
    }
}

impl Default for MockResponder {
    fn default() -> Self {
        Self::new()
    }
}
