//! Gemini Provider Implementation
//!
//! Calls the Google Gemini `generateContent` REST API. The API key, model,
//! endpoint and request timeout are all supplied through [`GeminiConfig`].
//!
//! # Examples
//!
//! ```no_run
//! use studyguide_llm::{GeminiConfig, GeminiProvider};
//! use studyguide_domain::traits::LlmProvider;
//!
//! let config = GeminiConfig::new("my-api-key").with_model("gemini-2.5-flash");
//! let provider = GeminiProvider::new(config).unwrap();
//! let text = provider.generate("Explain osmosis in one sentence.").unwrap();
//! println!("{}", text);
//! ```

use crate::LlmError;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::fmt;
use std::time::Duration;
use studyguide_domain::traits::LlmProvider as LlmProviderTrait;
use tracing::debug;

/// Default Gemini API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Default timeout for a single request (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Connection settings for [`GeminiProvider`]
#[derive(Clone)]
pub struct GeminiConfig {
    /// API key sent in the `x-goog-api-key` header
    pub api_key: String,

    /// Model name, e.g. `gemini-2.5-pro`
    pub model: String,

    /// Base URL without a trailing slash
    pub endpoint: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl GeminiConfig {
    /// Configuration with the default model, endpoint and timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Use a different model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Use a different base URL (proxies, test servers)
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

impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Google Gemini text-generation provider
#[derive(Debug)]
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Create a provider from explicit configuration
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::NotConfigured`] for an empty API key and
    /// [`LlmError::Communication`] if the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self, LlmError> {
        if config.api_key.trim().is_empty() {
            return Err(LlmError::NotConfigured("Gemini API key is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Communication(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// The active configuration
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint, self.config.model
        )
    }

    /// Build the request body for a single-turn prompt.
    fn build_request_body(prompt: &str) -> Value {
        json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": prompt }],
                }
            ],
        })
    }

    /// Pull the generated text out of a `generateContent` response.
    ///
    /// The first candidate's parts are concatenated. A response with no
    /// candidates is reported with the block reason when the API gives one.
    fn parse_response(resp: &Value) -> Result<String, LlmError> {
        let Some(candidate) = resp["candidates"].get(0) else {
            let reason = resp["promptFeedback"]["blockReason"]
                .as_str()
                .unwrap_or("no candidates returned");
            return Err(LlmError::InvalidResponse(format!("empty response: {}", reason)));
        };

        let parts = candidate["content"]["parts"].as_array().ok_or_else(|| {
            let finish = candidate["finishReason"].as_str().unwrap_or("unknown");
            LlmError::InvalidResponse(format!(
                "missing candidates[0].content.parts (finishReason: {})",
                finish
            ))
        })?;

        let text: String = parts
            .iter()
            .filter_map(|part| part["text"].as_str())
            .collect();

        Ok(text)
    }
}

impl LlmProviderTrait for GeminiProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        debug!("Gemini request to model={} ({} chars)", self.config.model, prompt.len());

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&Self::build_request_body(prompt))
            .send()
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimitExceeded);
        }
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

        let resp: Value = response
            .json()
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        Self::parse_response(&resp)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = GeminiConfig::new("key");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GeminiConfig::new("super-secret");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let result = GeminiProvider::new(GeminiConfig::new("  "));
        assert!(matches!(result, Err(LlmError::NotConfigured(_))));
    }

    #[test]
    fn test_url_uses_model_and_trimmed_endpoint() {
        let config = GeminiConfig::new("key")
            .with_endpoint("http://localhost:9000/")
            .with_model("gemini-test");
        let provider = GeminiProvider::new(config).unwrap();
        assert_eq!(
            provider.url(),
            "http://localhost:9000/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn test_request_body_structure() {
        let body = GeminiProvider::build_request_body("Summarise this");
        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[0]["parts"][0]["text"], "Summarise this");
    }

    #[test]
    fn test_parse_response_joins_parts() {
        let resp = json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": "Term: Cell\n" }, { "text": "Definition: Unit of life" }]
                },
                "finishReason": "STOP"
            }]
        });
        let text = GeminiProvider::parse_response(&resp).unwrap();
        assert_eq!(text, "Term: Cell\nDefinition: Unit of life");
    }

    #[test]
    fn test_parse_response_reports_block_reason() {
        let resp = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        let err = GeminiProvider::parse_response(&resp).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_parse_response_without_parts() {
        let resp = json!({ "candidates": [{ "finishReason": "MAX_TOKENS" }] });
        let err = GeminiProvider::parse_response(&resp).unwrap_err();
        assert!(matches!(err, LlmError::InvalidResponse(ref m) if m.contains("MAX_TOKENS")));
    }
}
