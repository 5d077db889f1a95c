//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use studyguide_domain::Difficulty;
use studyguide_generator::{GeneratorConfig, DEFAULT_CHUNK_SIZE};
use studyguide_llm::{ProviderKind, ProviderSettings};

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Generation defaults
    #[serde(default)]
    pub generation: GenerationSettings,

    /// Generation service
    #[serde(default)]
    pub provider: ProviderSettings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Generation defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Chunk budget in characters
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Difficulty used when `--difficulty` is not given
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Panels and the interactive viewer
    Pretty,
    /// JSON document
    Json,
    /// Raw generated text
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".studyguide").join("config.toml"))
    }

    /// Resolve an explicit path or fall back to the default one.
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load configuration from `path`, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<()> {
        self.generation.difficulty()?;
        self.generator_config(None).validate()?;
        Ok(())
    }

    /// Generator configuration, with an optional chunk size override.
    pub fn generator_config(&self, chunk_size: Option<usize>) -> GeneratorConfig {
        GeneratorConfig::with_chunk_size(chunk_size.unwrap_or(self.generation.chunk_size))
    }

    /// Provider settings with the credential resolved.
    ///
    /// A key passed in `env_key` (from `GOOGLE_API_KEY`) takes precedence
    /// over one stored in the file.
    pub fn provider_settings(&self, env_key: Option<String>) -> ProviderSettings {
        let mut settings = self.provider.clone();
        if let Some(key) = env_key.filter(|k| !k.trim().is_empty()) {
            settings.api_key = Some(key);
        }
        settings
    }

    /// Copy with the API key masked, for display.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.provider.api_key.is_some() {
            config.provider.api_key = Some("********".to_string());
        }
        config
    }
}

impl GenerationSettings {
    /// The configured default difficulty.
    pub fn difficulty(&self) -> Result<Difficulty> {
        Difficulty::parse(&self.difficulty).ok_or_else(|| {
            CliError::Config(format!(
                "Unknown difficulty '{}' (expected beginner, intermediate or advanced)",
                self.difficulty
            ))
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Pretty,
        }
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            difficulty: default_difficulty(),
        }
    }
}

/// Read the API key from the process environment, loading `.env` first.
pub fn api_key_from_env() -> Option<String> {
    // A missing .env file is not an error
    dotenvy::dotenv().ok();
    std::env::var(API_KEY_ENV).ok()
}

/// Whether `settings` needs a credential that is missing.
pub fn missing_credential(settings: &ProviderSettings) -> bool {
    settings.kind == ProviderKind::Gemini
        && settings.api_key.as_deref().map_or(true, |k| k.trim().is_empty())
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Pretty
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_difficulty() -> String {
    Difficulty::default().as_str().to_string()
}
