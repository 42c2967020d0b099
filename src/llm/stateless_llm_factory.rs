use std::sync::Arc;
use reqwest::Client;
use tracing::{info, warn};

use super::claude_llm::ClaudeLLM;
use super::stateless_llm_interface::StatelessLLMInterface;
use crate::config::LlmConfig;

/// Factory for creating stateless LLM instances
pub struct StatelessLLMFactory;

impl StatelessLLMFactory {
    /// Create the Claude client from configuration.
    ///
    /// Returns `None` when no API key is configured; the server still runs
    /// and translate requests fail with a configuration error.
    pub fn create_llm(config: &LlmConfig, client: Client) -> Option<Arc<dyn StatelessLLMInterface>> {
        let Some(api_key) = config.api_key() else {
            warn!("ANTHROPIC_API_KEY is not set; translation requests will fail");
            return None;
        };

        info!("Initializing LLM: claude");
        Some(Arc::new(ClaudeLLM::new(
            client,
            config.base_url.clone(),
            config.model.clone(),
            api_key.to_string(),
            config.max_tokens,
            config.anthropic_version.clone(),
        )))
    }
}
