//! HTTP client for the Ollama chat API.

use std::time::Duration;

use async_trait::async_trait;
use chat_core::{ChatError, ChatMessage};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::api_types::{ChatApiRequest, ChatApiResponse, ModelTurn};
use crate::config::OllamaConfig;

/// A model backend that can complete a conversation.
///
/// The production implementation is [`OllamaClient`]; tests substitute
/// scripted backends to drive the tool loop deterministically.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Request one assistant turn for the given conversation.
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        tools: Vec<Value>,
    ) -> Result<ModelTurn, ChatError>;
}

/// Client for an Ollama server's `/api/chat` endpoint.
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    /// Create a new client from configuration.
    pub fn new(config: &OllamaConfig) -> Result<Self, ChatError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                ChatError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl ChatBackend for OllamaClient {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        tools: Vec<Value>,
    ) -> Result<ModelTurn, ChatError> {
        let url = format!("{}/api/chat", self.base_url);

        let request = ChatApiRequest {
            model: self.model.clone(),
            messages,
            stream: false,
            tools,
        };

        debug!("Sending chat request to {}", url);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ChatError::Backend(format!(
                "Ollama error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let payload: ChatApiResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Backend(format!("Failed to parse response: {}", e)))?;

        debug!("Received chat response: {:?}", payload);

        Ok(payload.into_turn())
    }
}
