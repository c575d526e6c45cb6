//! Canned-response generator.
//!
//! Waits a fixed latency, then answers from a keyword table. Prompts that
//! match no keyword get a filler reply picked by `prompt.len() % FILLERS.len()`,
//! so the same prompt always yields the same text.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use crate::inference::{GeneratorError, ResponseGenerator};

pub const DEFAULT_LATENCY: Duration = Duration::from_secs(2);

/// Keyword groups checked in order against the lowercased prompt.
const KEYWORD_REPLIES: &[(&[&str], &str)] = &[
    (
        &["hello", "hi"],
        "Hello there! It's great to chat with you. What would you like to talk about?",
    ),
    (
        &["how are you"],
        "I'm doing well, thank you for asking! I'm here and ready to help with whatever you need.",
    ),
    (
        &["weather"],
        "I'm just a mock AI, so I can't check the real weather. But let's pretend it's a beautiful sunny day with a gentle breeze!",
    ),
    (
        &["help"],
        "I'm a mock chat interface running in your terminal. I answer with pre-programmed replies. Try asking about the weather, saying hello, or asking me to tell a joke!",
    ),
    (
        &["joke"],
        "Why don't scientists trust atoms? Because they make up everything!",
    ),
    (
        &["code", "programming"],
        "Ah, a fellow coder! This chat is drawn with ratatui, and every frame you see is rendered straight into your terminal.",
    ),
    (
        &["quit", "exit"],
        "You can press ESC or Ctrl+C to quit the application. Thanks for chatting!",
    ),
];

const FILLERS: &[&str] = &[
    "That's interesting! Tell me more about that.",
    "I see what you mean. Have you considered looking at it from another angle?",
    "Fascinating! This reminds me of something... but I'm just a mock AI so I'll make something up: Did you know that honey never spoils?",
    "Great question! While I can't give you a real answer (being a mock and all), I can say that you're asking the right questions!",
    "Hmm, let me think about that... *pretends to access vast knowledge base* ... I'd say the answer is 42!",
];

/// Pick the canned reply for `prompt`.
pub fn canned_reply(prompt: &str) -> &'static str {
    let lowered = prompt.to_lowercase();
    KEYWORD_REPLIES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, reply)| *reply)
        .unwrap_or(FILLERS[prompt.len() % FILLERS.len()])
}

pub struct MockProvider {
    latency: Duration,
}

impl MockProvider {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

#[async_trait]
impl ResponseGenerator for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        debug!("mock generating reply after {:?} (prompt len={})", self.latency, prompt.len());
        tokio::time::sleep(self.latency).await;
        Ok(canned_reply(prompt).to_string())
    }
}
