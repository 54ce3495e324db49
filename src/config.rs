// ABOUTME: Environment-driven configuration for the generator and the
// ABOUTME: Anthropic client - model id, token cap, round budget.

use crate::error::LlmError;
use crate::generator::DEFAULT_MAX_ROUNDS;

/// Default model when none is configured.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Anthropic API key.
    pub api_key: String,

    /// Model id to generate with.
    pub model: String,

    /// Output token cap per completion call.
    pub max_tokens: u32,

    /// Tool round budget per query.
    pub max_tool_rounds: usize,
}

impl Config {
    /// Default output token cap, sized for multi-round answers.
    pub const DEFAULT_MAX_TOKENS: u32 = 1200;

    /// Create a config with defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: Self::DEFAULT_MAX_TOKENS,
            max_tool_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    /// Load configuration from the environment.
    ///
    /// `ANTHROPIC_API_KEY` is required; `ANTHROPIC_MODEL` and
    /// `MAX_TOOL_ROUNDS` override their defaults when set.
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
            LlmError::Configuration("ANTHROPIC_API_KEY environment variable not set".to_string())
        })?;

        let mut config = Self::new(api_key);
        if let Ok(model) = std::env::var("ANTHROPIC_MODEL") {
            config.model = model;
        }
        if let Ok(rounds) = std::env::var("MAX_TOOL_ROUNDS") {
            config.max_tool_rounds = rounds.parse().map_err(|_| {
                LlmError::Configuration(format!("invalid MAX_TOOL_ROUNDS value: {rounds}"))
            })?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("test-key");
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_tokens, 1200);
        assert_eq!(config.max_tool_rounds, 2);
    }

    #[test]
    fn test_from_env_missing_key() {
        // Temporarily unset the env var if it exists
        let original = std::env::var("ANTHROPIC_API_KEY").ok();
        unsafe {
            std::env::remove_var("ANTHROPIC_API_KEY");
        }

        let result = Config::from_env();
        assert!(result.is_err());

        // Restore if it was set
        if let Some(val) = original {
            unsafe {
                std::env::set_var("ANTHROPIC_API_KEY", val);
            }
        }
    }
}
