use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::llm::{build_http_client, StatelessLLMFactory, StatelessLLMInterface};
use crate::persona::load_persona;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// System prompt shared read-only by every request
    pub persona: Arc<str>,
    /// `None` when no API key is configured
    pub llm: Option<Arc<dyn StatelessLLMInterface>>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let persona = load_persona(config.system_config.persona_path.as_deref())?;
        let client = build_http_client(Duration::from_secs(config.llm_config.timeout_secs))?;
        let llm = StatelessLLMFactory::create_llm(&config.llm_config, client);

        Ok(Self::with_llm(config, persona, llm))
    }

    pub fn with_llm(
        config: Config,
        persona: Arc<str>,
        llm: Option<Arc<dyn StatelessLLMInterface>>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            persona,
            llm,
        }
    }
}
