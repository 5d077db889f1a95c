//! Configuration for the Generator

use crate::error::GeneratorError;
use serde::{Deserialize, Serialize};

/// Default chunk budget in characters
pub const DEFAULT_CHUNK_SIZE: usize = 3000;

/// Smallest accepted chunk budget
///
/// Anything below this would send a model call per line of text.
pub const MIN_CHUNK_SIZE: usize = 100;

/// Configuration for the Generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Chunk budget in characters
    pub max_chunk_size: usize,
}

impl GeneratorConfig {
    /// Configuration with an explicit chunk budget
    pub fn with_chunk_size(max_chunk_size: usize) -> Self {
        Self { max_chunk_size }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.max_chunk_size < MIN_CHUNK_SIZE {
            return Err(GeneratorError::Config(format!(
                "max_chunk_size must be at least {} (got {})",
                MIN_CHUNK_SIZE, self.max_chunk_size
            )));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, GeneratorError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| GeneratorError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, GeneratorError> {
        toml::to_string_pretty(self)
            .map_err(|e| GeneratorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
