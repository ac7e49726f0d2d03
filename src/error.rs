//! Error types for llm-bridge

use thiserror::Error;

/// Result type alias using [`BridgeError`]
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Main error type for llm-bridge
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Wrapped client rejected at adapter construction
    #[error("Invalid wrapped client: {0}")]
    InvalidClient(String),

    /// Configuration validation error
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Missing API key
    #[error("Missing API key for provider: {provider}")]
    MissingApiKey { provider: String },

    /// API error (non-2xx status or malformed payload)
    #[error("API error from {model}: {message}")]
    Api { model: String, message: String },

    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Completion arrived without text content
    #[error("Model {model} returned a response without text content")]
    MissingContent { model: String },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
