use std::fmt;

use async_trait::async_trait;

/// Errors a generator can report instead of a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// The backend failed to produce a reply.
    Failed(String),
    /// The backend gave up waiting.
    TimedOut,
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::TimedOut => write!(f, "generation timed out"),
            GeneratorError::Failed(msg) => write!(f, "generation failed: {msg}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Produces assistant replies asynchronously.
///
/// Implementations must be cancel-safe: the event loop drops the future
/// (by aborting its task) when the user quits mid-request.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Returns the name of the generator.
    fn name(&self) -> &str;

    /// Produce a reply to `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}
