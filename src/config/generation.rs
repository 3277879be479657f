//! Document generation configuration
//!
//! The strategy is a closed enumeration selected at startup. A value the
//! deserializer does not recognize fails configuration loading outright;
//! there is no silent per-request fallback to a default mode.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Document generation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Which generation strategy to wire at startup
    #[serde(default)]
    pub strategy: GenerationStrategy,

    /// OpenAI API key (required for the `openai` strategy)
    pub openai_api_key: Option<String>,

    /// Model for the remote strategy
    #[serde(default = "default_model")]
    pub model: String,

    /// Output-length ceiling for remote completions
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature for remote completions
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Remote request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Generation strategy selection
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStrategy {
    /// Always use the local template engine
    #[default]
    Free,
    /// Attempt the remote provider, fall back to the template engine on
    /// any failure
    OpenAi,
}

impl GenerationConfig {
    /// Get the remote timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if an OpenAI key is configured
    pub fn has_openai_key(&self) -> bool {
        self.openai_api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate generation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.strategy == GenerationStrategy::OpenAi && !self.has_openai_key() {
            return Err(ValidationError::MissingRequired("OPENAI_API_KEY"));
        }
        if self.max_tokens == 0 {
            return Err(ValidationError::InvalidMaxTokens);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            strategy: GenerationStrategy::default(),
            openai_api_key: None,
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    16_000
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout() -> u64 {
    120
}
