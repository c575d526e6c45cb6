//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::core::state::{App, DEFAULT_GREETING};
use crate::inference::{GeneratorError, ResponseGenerator};

/// A generator that replies with a fixed result after a fixed delay and
/// counts how many requests it has started.
pub struct ScriptedProvider {
    pub reply: Result<String, GeneratorError>,
    pub delay: Duration,
    pub calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn replying(text: &str, delay: Duration) -> Self {
        Self {
            reply: Ok(text.to_string()),
            delay,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str, delay: Duration) -> Self {
        Self {
            reply: Err(GeneratorError::Failed(message.to_string())),
            delay,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ResponseGenerator for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, GeneratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.reply.clone()
    }
}

/// Creates a test App with the default greeting and an 80x24 terminal.
pub fn test_app() -> App {
    App::new(DEFAULT_GREETING).with_size(80, 24)
}
