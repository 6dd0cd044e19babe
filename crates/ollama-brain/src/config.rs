//! Configuration for OllamaBrain.

use chat_core::ChatError;
use std::env;
use std::path::Path;

use crate::prompt::{load_prompt_file, MASTER_PROMPT};

/// Default system prompt file name.
pub const DEFAULT_PROMPT_FILE: &str = "SYSTEM_PROMPT.md";

/// Configuration for OllamaBrain.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Base URL of the Ollama server.
    pub base_url: String,

    /// Model name to use.
    pub model: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Maximum number of tool rounds before giving up on a reply.
    pub max_tool_rounds: usize,

    /// Maximum number of conversation turns to keep in history.
    pub max_history_turns: usize,

    /// System prompt. Falls back to the built-in prompt when None.
    pub system_prompt: Option<String>,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:11434".to_string(),
            model: "llama3".to_string(),
            timeout_secs: 60,
            max_tool_rounds: 5,
            max_history_turns: 10,
            system_prompt: None,
        }
    }
}

impl OllamaConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `OLLAMA_BASE_URL` - Server base URL (default: http://127.0.0.1:11434)
    /// - `OLLAMA_MODEL` - Model name (default: llama3)
    /// - `OLLAMA_TIMEOUT_SECS` - Request timeout in seconds (default: 60)
    /// - `OLLAMA_MAX_TOOL_ROUNDS` - Max tool rounds per request (default: 5)
    /// - `OLLAMA_MAX_HISTORY_TURNS` - Max history turns (default: 10)
    /// - `OLLAMA_SYSTEM_PROMPT` - System prompt (overrides prompt file)
    /// - `OLLAMA_PROMPT_FILE` - Path to system prompt file (default: SYSTEM_PROMPT.md)
    ///
    /// System prompt priority:
    /// 1. `OLLAMA_SYSTEM_PROMPT` env var (if set)
    /// 2. Contents of prompt file (if exists)
    /// 3. Built-in prompt
    pub fn from_env() -> Result<Self, ChatError> {
        let base_url = env::var("OLLAMA_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:11434".to_string());

        let model = env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3".to_string());

        let timeout_secs = env::var("OLLAMA_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        let max_tool_rounds: usize = env::var("OLLAMA_MAX_TOOL_ROUNDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        if max_tool_rounds == 0 {
            return Err(ChatError::Configuration(
                "OLLAMA_MAX_TOOL_ROUNDS must be at least 1".to_string(),
            ));
        }

        let max_history_turns = env::var("OLLAMA_MAX_HISTORY_TURNS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        // System prompt: env var takes precedence, then try loading from file
        let system_prompt = if let Ok(prompt) = env::var("OLLAMA_SYSTEM_PROMPT") {
            Some(prompt)
        } else {
            let prompt_file = env::var("OLLAMA_PROMPT_FILE")
                .unwrap_or_else(|_| DEFAULT_PROMPT_FILE.to_string());
            load_prompt_file(&prompt_file)
        };

        Ok(Self {
            base_url,
            model,
            timeout_secs,
            max_tool_rounds,
            max_history_turns,
            system_prompt,
        })
    }

    /// The effective system prompt, falling back to the built-in one.
    pub fn effective_system_prompt(&self) -> &str {
        self.system_prompt.as_deref().unwrap_or(MASTER_PROMPT)
    }

    /// Create a new config builder.
    pub fn builder() -> OllamaConfigBuilder {
        OllamaConfigBuilder::default()
    }
}

/// Builder for OllamaConfig.
#[derive(Debug, Default)]
pub struct OllamaConfigBuilder {
    config: OllamaConfig,
}

impl OllamaConfigBuilder {
    /// Set the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the request timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Set the maximum number of tool rounds.
    pub fn max_tool_rounds(mut self, rounds: usize) -> Self {
        self.config.max_tool_rounds = rounds;
        self
    }

    /// Set the max history turns.
    pub fn max_history_turns(mut self, turns: usize) -> Self {
        self.config.max_history_turns = turns;
        self
    }

    /// Set the system prompt.
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.system_prompt = Some(prompt.into());
        self
    }

    /// Load system prompt from a file.
    ///
    /// If the file exists and is non-empty, sets the system prompt.
    /// Returns self for chaining.
    pub fn load_prompt_file(mut self, path: impl AsRef<Path>) -> Self {
        if let Some(prompt) = load_prompt_file(path) {
            self.config.system_prompt = Some(prompt);
        }
        self
    }

    /// Build the configuration.
    pub fn build(self) -> OllamaConfig {
        self.config
    }
}
