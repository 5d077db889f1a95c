//! Ollama Provider Implementation
//!
//! Provides integration with Ollama's local LLM API. No credential is needed,
//! which makes it the offline alternative to Gemini.
//!
//! # Examples
//!
//! ```no_run
//! use studyguide_llm::{OllamaConfig, OllamaProvider};
//! use studyguide_domain::traits::LlmProvider;
//!
//! let provider = OllamaProvider::new(OllamaConfig::new("llama3")).unwrap();
//! let text = provider.generate("Say hello").unwrap();
//! ```

use crate::LlmError;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use studyguide_domain::traits::LlmProvider as LlmProviderTrait;
use tracing::debug;

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default model
pub const DEFAULT_MODEL: &str = "llama3";

/// Default timeout for LLM requests (local models can be slow)
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Connection settings for [`OllamaProvider`]
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Base URL without a trailing slash
    pub endpoint: String,

    /// Model to use (e.g. "llama3", "mistral")
    pub model: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl OllamaConfig {
    /// Configuration for `model` on the default local endpoint
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: model.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Use a different base URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Ollama API provider for local LLM inference
#[derive(Debug)]
pub struct OllamaProvider {
    config: OllamaConfig,
    client: Client,
}

/// Request body for Ollama generate API
#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Response from Ollama generate API
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

impl OllamaProvider {
    /// Create a new Ollama provider
    pub fn new(config: OllamaConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Communication(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// The active configuration
    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }
}

impl LlmProviderTrait for OllamaProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        let url = format!("{}/api/generate", self.config.endpoint);
        debug!("Ollama request to model={}", self.config.model);

        let request_body = OllamaGenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(self.config.model.clone()));
        }
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<OllamaGenerateResponse>()
            .map(|r| r.response)
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
