//! Study Guide LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `studyguide-domain`.
//!
//! # Providers
//!
//! - `GeminiProvider`: Google Gemini `generateContent` API (default)
//! - `OllamaProvider`: local Ollama API, no credential required
//! - `MockProvider`: deterministic scripted replies for testing
//!
//! Every provider takes its configuration (credential, model, endpoint,
//! timeout) as an explicit value at construction. Nothing is read from the
//! process environment here; the CLI resolves credentials and hands them in.
//!
//! # Examples
//!
//! ```
//! use studyguide_llm::MockProvider;
//! use studyguide_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new("Hello from LLM!");
//! let result = provider.generate("test prompt").unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! ```

#![warn(missing_docs)]

pub mod gemini;
pub mod ollama;
mod provider;

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use studyguide_domain::traits::LlmProvider as LlmProviderTrait;
use thiserror::Error;

pub use gemini::{GeminiConfig, GeminiProvider};
pub use ollama::{OllamaConfig, OllamaProvider};
pub use provider::{Provider, ProviderKind, ProviderSettings};

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or transport failure
    #[error("Communication error: {0}")]
    Communication(String),

    /// The service answered with a non-success status
    #[error("API error (HTTP {status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, as returned by the service
        body: String,
    },

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Provider is missing required configuration (e.g. an API key)
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Scripted outcome of a mock call
#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error(String),
}

impl MockReply {
    fn into_result(self) -> Result<String, LlmError> {
        match self {
            MockReply::Text(text) => Ok(text),
            MockReply::Error(message) => Err(LlmError::Other(message)),
        }
    }
}

#[derive(Debug, Default)]
struct MockState {
    responses: HashMap<String, MockReply>,
    queue: VecDeque<MockReply>,
    prompts: Vec<String>,
}

/// Mock LLM provider for deterministic testing
///
/// Replies are chosen in this order:
/// 1. the next queued reply (see [`MockProvider::queue_response`] / [`MockProvider::queue_error`])
/// 2. a reply registered for the exact prompt
/// 3. the default response
///
/// Every prompt received is recorded so tests can assert on call order.
///
/// # Examples
///
/// ```
/// use studyguide_llm::MockProvider;
/// use studyguide_domain::traits::LlmProvider;
///
/// let provider = MockProvider::new("fallback");
/// provider.queue_response("first");
/// provider.queue_error("service unavailable");
///
/// assert_eq!(provider.generate("a").unwrap(), "first");
/// assert!(provider.generate("b").is_err());
/// assert_eq!(provider.generate("c").unwrap(), "fallback");
/// assert_eq!(provider.prompts(), vec!["a", "b", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    state: Arc<Mutex<MockState>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&self, prompt: impl Into<String>, response: impl Into<String>) {
        self.state()
            .responses
            .insert(prompt.into(), MockReply::Text(response.into()));
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&self, prompt: impl Into<String>, message: impl Into<String>) {
        self.state()
            .responses
            .insert(prompt.into(), MockReply::Error(message.into()));
    }

    /// Queue a response for the next unanswered call, whatever its prompt
    pub fn queue_response(&self, response: impl Into<String>) {
        self.state().queue.push_back(MockReply::Text(response.into()));
    }

    /// Queue a failure for the next unanswered call, whatever its prompt
    pub fn queue_error(&self, message: impl Into<String>) {
        self.state().queue.push_back(MockReply::Error(message.into()));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.state().prompts.len()
    }

    /// Prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.state().prompts.clone()
    }

    /// Forget recorded prompts
    pub fn reset_call_count(&self) {
        self.state().prompts.clear();
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        let mut state = self.state();
        state.prompts.push(prompt.to_string());

        if let Some(reply) = state.queue.pop_front() {
            return reply.into_result();
        }

        if let Some(reply) = state.responses.get(prompt) {
            return reply.clone().into_result();
        }

        Ok(self.default_response.clone())
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.generate("any prompt");
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "Test response");
    }

    #[test]
    fn test_mock_provider_specific_responses() {
        let provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.generate("hello").unwrap(), "world");
        assert_eq!(provider.generate("foo").unwrap(), "bar");
        assert_eq!(provider.generate("unknown").unwrap(), "Default mock response");
    }

    #[test]
    fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");

        assert_eq!(provider.call_count(), 0);

        provider.generate("prompt1").unwrap();
        assert_eq!(provider.call_count(), 1);

        provider.generate("prompt2").unwrap();
        assert_eq!(provider.call_count(), 2);

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn test_mock_provider_error() {
        let provider = MockProvider::default();
        provider.add_error("bad prompt", "quota exhausted");

        let result = provider.generate("bad prompt");
        match result {
            Err(LlmError::Other(message)) => assert_eq!(message, "quota exhausted"),
            other => panic!("Expected Other error, got {:?}", other),
        }
    }

    #[test]
    fn test_queue_takes_priority_over_prompt_map() {
        let provider = MockProvider::default();
        provider.add_response("p", "mapped");
        provider.queue_response("queued");

        assert_eq!(provider.generate("p").unwrap(), "queued");
        assert_eq!(provider.generate("p").unwrap(), "mapped");
    }

    #[test]
    fn test_mock_provider_clone() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.generate("test").unwrap();

        // Both should share the same call log due to Arc
        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }

    #[test]
    fn test_error_messages() {
        let err = LlmError::Api { status: 500, body: "boom".to_string() };
        assert_eq!(err.to_string(), "API error (HTTP 500): boom");
        assert_eq!(LlmError::RateLimitExceeded.to_string(), "Rate limit exceeded");
    }
}
