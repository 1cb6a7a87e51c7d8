//! Siumai-backed language model client.
//!
//! This module integrates with the siumai library for text generation,
//! supporting multiple providers like `OpenAI`, Anthropic, and Ollama.

use crate::{
    error::{AgentError, Result},
    llm::{LanguageModel, apply_stop_sequences},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use siumai::prelude::*;
use std::sync::Arc;

/// Configuration for the siumai-backed generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmClientConfig {
    /// Provider type (openai, anthropic, ollama)
    pub provider: String,
    /// Model name
    pub model: String,
    /// Temperature for response generation
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl Default for LlmClientConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: Some(0.0f32),
            max_tokens: Some(1024),
        }
    }
}

impl LlmClientConfig {
    /// Create a new configuration
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
            ..Default::default()
        }
    }

    /// Set temperature
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set max tokens
    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Language model backed by a siumai client.
///
/// Siumai's portable chat surface does not plumb provider-side stop tokens,
/// so stop sequences are enforced here by truncating the response at the
/// first occurrence. The output parser independently tolerates un-stopped
/// text, so a provider that streams past the token still cannot corrupt a
/// transcript.
pub struct SiumaiGenerator {
    /// The underlying siumai client
    client: Arc<dyn LlmClient>,
    /// Client configuration
    config: LlmClientConfig,
}

impl Clone for SiumaiGenerator {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            config: self.config.clone(),
        }
    }
}

impl std::fmt::Debug for SiumaiGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiumaiGenerator")
            .field("config", &self.config)
            .field("client", &"<LlmClient>")
            .finish()
    }
}

impl SiumaiGenerator {
    /// Create a generator from an already-built siumai client
    pub fn new(client: Box<dyn LlmClient>, config: LlmClientConfig) -> Self {
        Self {
            client: Arc::from(client),
            config,
        }
    }

    /// Create an `OpenAI`-backed generator
    pub async fn openai(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        Self::openai_with_config(api_key, LlmClientConfig::new("openai", model)).await
    }

    /// Create an `OpenAI`-backed generator with explicit sampling settings
    pub async fn openai_with_config(
        api_key: impl Into<String>,
        config: LlmClientConfig,
    ) -> Result<Self> {
        let mut builder = LlmBuilder::new()
            .openai()
            .api_key(api_key.into())
            .model(&config.model);

        if let Some(temperature) = config.temperature {
            builder = builder.temperature(temperature);
        }
        if let Some(max_tokens) = config.max_tokens {
            builder = builder.max_tokens(max_tokens);
        }

        let client = builder
            .build()
            .await
            .map_err(|e| AgentError::llm(format!("Failed to create OpenAI client: {e}")))?;

        Ok(Self {
            client: Arc::new(client),
            config,
        })
    }

    /// Create an Anthropic-backed generator
    pub async fn anthropic(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        Self::anthropic_with_config(api_key, LlmClientConfig::new("anthropic", model)).await
    }

    /// Create an Anthropic-backed generator with explicit sampling settings
    pub async fn anthropic_with_config(
        api_key: impl Into<String>,
        config: LlmClientConfig,
    ) -> Result<Self> {
        let mut builder = LlmBuilder::new()
            .anthropic()
            .api_key(api_key.into())
            .model(&config.model);

        if let Some(temperature) = config.temperature {
            builder = builder.temperature(temperature);
        }
        if let Some(max_tokens) = config.max_tokens {
            builder = builder.max_tokens(max_tokens);
        }

        let client = builder
            .build()
            .await
            .map_err(|e| AgentError::llm(format!("Failed to create Anthropic client: {e}")))?;

        Ok(Self {
            client: Arc::new(client),
            config,
        })
    }

    /// Create an Ollama-backed generator
    pub async fn ollama(base_url: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        Self::ollama_with_config(base_url, LlmClientConfig::new("ollama", model)).await
    }

    /// Create an Ollama-backed generator with explicit sampling settings
    pub async fn ollama_with_config(
        base_url: impl Into<String>,
        config: LlmClientConfig,
    ) -> Result<Self> {
        let mut builder = LlmBuilder::new()
            .ollama()
            .base_url(base_url.into())
            .model(&config.model);

        if let Some(temperature) = config.temperature {
            builder = builder.temperature(temperature);
        }
        if let Some(max_tokens) = config.max_tokens {
            builder = builder.max_tokens(max_tokens);
        }

        let client = builder
            .build()
            .await
            .map_err(|e| AgentError::llm(format!("Failed to create Ollama client: {e}")))?;

        Ok(Self {
            client: Arc::new(client),
            config,
        })
    }

    /// Get the client configuration
    #[must_use]
    pub fn config(&self) -> &LlmClientConfig {
        &self.config
    }
}

#[async_trait]
impl LanguageModel for SiumaiGenerator {
    async fn generate(&self, prompt: &str, stop_sequences: &[&str]) -> Result<String> {
        let messages = vec![user!(prompt.to_string())];

        let response = self
            .client
            .chat(messages)
            .await
            .map_err(|e| AgentError::llm(format!("Chat request failed: {e}")))?;

        let Some(text) = response.content_text() else {
            return Err(AgentError::llm("No text content in response"));
        };

        let text = text.to_string();
        Ok(apply_stop_sequences(&text, stop_sequences).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_sampling_settings_are_kept() {
        let config = LlmClientConfig::new("openai", "gpt-4o-mini")
            .with_temperature(0.2)
            .with_max_tokens(512);

        assert_eq!(config.temperature, Some(0.2));
        assert_eq!(config.max_tokens, Some(512));
    }

    #[test]
    fn test_default_config() {
        let config = LlmClientConfig::default();
        assert_eq!(config.provider, "openai");
        assert_eq!(config.temperature, Some(0.0));
        assert!(config.max_tokens.is_some());
    }
}
