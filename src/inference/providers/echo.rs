use std::time::Duration;

use async_trait::async_trait;

use crate::inference::{GeneratorError, ResponseGenerator};

/// Repeats the prompt back after a fixed latency.
pub struct EchoProvider {
    latency: Duration,
}

impl EchoProvider {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl ResponseGenerator for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        tokio::time::sleep(self.latency).await;
        Ok(format!("You said: {prompt}"))
    }
}
