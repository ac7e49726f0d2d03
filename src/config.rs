//! Client configuration
//!
//! Carries the endpoint coordinates for one chat model: the model
//! identifier, an optional custom base URL, and the API key. Credentials
//! left empty are resolved from the environment at client construction.

use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, Result};

/// Default endpoint for the OpenAI API
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default endpoint for the DeepSeek API
pub const DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com/v1";

/// Configuration for an OpenAI-compatible chat client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Model identifier (e.g. "deepseek-chat")
    pub model: String,

    /// Custom API endpoint (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// API key for authentication; empty means "resolve from environment"
    pub api_key: String,
}

impl ClientConfig {
    /// Create a new configuration
    #[must_use]
    pub fn new(model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            base_url: None,
            api_key: api_key.into(),
        }
    }

    /// Set a custom endpoint
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Get the effective base URL (custom or OpenAI default)
    #[must_use]
    pub fn effective_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| OPENAI_BASE_URL.to_string())
    }

    /// Preset for the DeepSeek endpoint
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::MissingApiKey`] when `DEEPSEEK_API_KEY` is
    /// not set in the environment.
    pub fn deepseek(model: impl Into<String>) -> Result<Self> {
        let api_key =
            std::env::var("DEEPSEEK_API_KEY").map_err(|_| BridgeError::MissingApiKey {
                provider: "deepseek".to_string(),
            })?;

        Ok(Self::new(model, api_key).with_base_url(DEEPSEEK_BASE_URL))
    }
}
