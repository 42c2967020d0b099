use async_trait::async_trait;

use crate::error::AppError;

/// Interface for a stateless language model
/// Every call carries its own system prompt and a single user message;
/// nothing is remembered between calls.
#[async_trait]
pub trait StatelessLLMInterface: Send + Sync {
    /// Send one user prompt and return the model's text reply.
    async fn chat_completion(&self, system: &str, prompt: &str) -> Result<String, AppError>;
}
