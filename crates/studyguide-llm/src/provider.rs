//! Provider selection from configuration

use crate::{gemini, ollama, GeminiConfig, GeminiProvider, LlmError, OllamaConfig, OllamaProvider};
use serde::{Deserialize, Serialize};
use studyguide_domain::traits::LlmProvider as LlmProviderTrait;

const MISSING_KEY: &str =
    "Google API key not found. Set GOOGLE_API_KEY in the environment or a .env file.";

/// Which generation backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Google Gemini (requires an API key)
    #[default]
    Gemini,
    /// Local Ollama server
    Ollama,
}

impl ProviderKind {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::Ollama => "ollama",
        }
    }
}

/// Provider settings as they appear in the configuration file
///
/// Unset optional fields fall back to the selected provider's defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Backend to use
    #[serde(default)]
    pub kind: ProviderKind,

    /// Model override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Endpoint override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Per-request timeout override (seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// API key (Gemini only); usually supplied through the environment instead
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl ProviderSettings {
    /// Model that will actually be used
    pub fn effective_model(&self) -> &str {
        match (&self.model, self.kind) {
            (Some(model), _) => model.as_str(),
            (None, ProviderKind::Gemini) => gemini::DEFAULT_MODEL,
            (None, ProviderKind::Ollama) => ollama::DEFAULT_MODEL,
        }
    }
}

/// A configured generation backend
///
/// Wraps the concrete providers so callers can pick one at runtime while the
/// generator stays generic over [`LlmProviderTrait`].
#[derive(Debug)]
pub enum Provider {
    /// Google Gemini
    Gemini(GeminiProvider),
    /// Local Ollama
    Ollama(OllamaProvider),
}

impl Provider {
    /// Build the provider described by `settings`
    ///
    /// # Errors
    ///
    /// Gemini without an API key yields [`LlmError::NotConfigured`].
    pub fn from_settings(settings: &ProviderSettings) -> Result<Self, LlmError> {
        match settings.kind {
            ProviderKind::Gemini => {
                let api_key = settings
                    .api_key
                    .as_deref()
                    .filter(|key| !key.trim().is_empty())
                    .ok_or_else(|| LlmError::NotConfigured(MISSING_KEY.to_string()))?;

                let mut config =
                    GeminiConfig::new(api_key).with_model(settings.effective_model());
                if let Some(endpoint) = &settings.endpoint {
                    config = config.with_endpoint(endpoint.as_str());
                }
                if let Some(timeout) = settings.timeout_secs {
                    config = config.with_timeout_secs(timeout);
                }
                Ok(Provider::Gemini(GeminiProvider::new(config)?))
            }
            ProviderKind::Ollama => {
                let mut config = OllamaConfig::new(settings.effective_model());
                if let Some(endpoint) = &settings.endpoint {
                    config = config.with_endpoint(endpoint.as_str());
                }
                if let Some(timeout) = settings.timeout_secs {
                    config = config.with_timeout_secs(timeout);
                }
                Ok(Provider::Ollama(OllamaProvider::new(config)?))
            }
        }
    }
}

impl LlmProviderTrait for Provider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        match self {
            Provider::Gemini(p) => p.generate(prompt),
            Provider::Ollama(p) => p.generate(prompt),
        }
    }

    fn model_name(&self) -> &str {
        match self {
            Provider::Gemini(p) => p.model_name(),
            Provider::Ollama(p) => p.model_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_requires_api_key() {
        let settings = ProviderSettings::default();
        let err = Provider::from_settings(&settings).unwrap_err();
        assert!(matches!(err, LlmError::NotConfigured(ref m) if m.contains("GOOGLE_API_KEY")));

        let settings = ProviderSettings {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(Provider::from_settings(&settings).is_err());
    }

    #[test]
    fn test_gemini_from_settings() {
        let settings = ProviderSettings {
            model: Some("gemini-2.5-flash".to_string()),
            api_key: Some("key".to_string()),
            timeout_secs: Some(5),
            ..Default::default()
        };
        match Provider::from_settings(&settings).unwrap() {
            Provider::Gemini(p) => {
                assert_eq!(p.config().model, "gemini-2.5-flash");
                assert_eq!(p.config().timeout_secs, 5);
            }
            other => panic!("Expected Gemini provider, got {:?}", other),
        }
    }

    #[test]
    fn test_ollama_needs_no_key() {
        let settings = ProviderSettings {
            kind: ProviderKind::Ollama,
            endpoint: Some("http://gpu:11434".to_string()),
            ..Default::default()
        };
        let provider = Provider::from_settings(&settings).unwrap();
        assert_eq!(provider.model_name(), ollama::DEFAULT_MODEL);
    }

    #[test]
    fn test_settings_toml_shape() {
        let settings: ProviderSettings =
            serde_json::from_str(r#"{"kind":"ollama","model":"mistral"}"#).unwrap();
        assert_eq!(settings.kind, ProviderKind::Ollama);
        assert_eq!(settings.effective_model(), "mistral");
        assert!(settings.api_key.is_none());
    }

    #[test]
    fn test_each_kind_builds_matching_provider() {
        for kind in [ProviderKind::Gemini, ProviderKind::Ollama] {
            let settings = ProviderSettings {
                kind,
                api_key: Some("key".to_string()),
                ..Default::default()
            };
            let provider = Provider::from_settings(&settings).unwrap();
            assert_eq!(provider.model_name(), settings.effective_model());
            match (kind, provider) {
                (ProviderKind::Gemini, Provider::Gemini(_)) => {}
                (ProviderKind::Ollama, Provider::Ollama(_)) => {}
                (kind, other) => panic!("{} built {:?}", kind.as_str(), other),
            }
        }
    }
}
