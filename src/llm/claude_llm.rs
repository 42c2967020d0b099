use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

use super::stateless_llm_interface::StatelessLLMInterface;
use crate::error::AppError;

/// Builds the HTTP client shared by every upstream call.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder().timeout(timeout).build()
}

/// Claude LLM implementation over the Anthropic Messages API
pub struct ClaudeLLM {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
    max_tokens: u32,
    anthropic_version: String,
}

impl ClaudeLLM {
    pub fn new(
        client: Client,
        base_url: String,
        model: String,
        api_key: String,
        max_tokens: u32,
        anthropic_version: String,
    ) -> Self {
        info!("Initialized ClaudeLLM: model={}, base_url={}", model, base_url);
        Self {
            client,
            base_url,
            model,
            api_key,
            max_tokens,
            anthropic_version,
        }
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<Value>,
}

/// Joins the text blocks of a reply with newlines. Blocks of any other type,
/// or without a string `text`, are skipped.
fn collect_text(blocks: &[Value]) -> String {
    blocks
        .iter()
        .filter(|block| block.get("type").and_then(Value::as_str) == Some("text"))
        .filter_map(|block| block.get("text").and_then(Value::as_str))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reads `error.message` from an upstream error body of any shape.
fn upstream_message(body: &Value) -> String {
    match body.get("error").and_then(|error| error.get("message")) {
        Some(Value::String(message)) if !message.is_empty() => message.clone(),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        Some(other @ (Value::Array(_) | Value::Object(_))) => other.to_string(),
        _ => "Unknown error".to_string(),
    }
}

#[async_trait]
impl StatelessLLMInterface for ClaudeLLM {
    async fn chat_completion(&self, system: &str, prompt: &str) -> Result<String, AppError> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            system,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(self.messages_url())
            .header("content-type", "application/json")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.anthropic_version)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!("Messages API responded {} ({} bytes)", status, body.len());

        if !status.is_success() {
            let error: Value = serde_json::from_slice(&body)?;
            return Err(AppError::Upstream {
                status: status.as_u16(),
                message: upstream_message(&error),
            });
        }

        let reply: MessagesResponse = serde_json::from_slice(&body)?;
        Ok(collect_text(&reply.content))
    }
}
