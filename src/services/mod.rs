//! Service layer for chat-completion providers
//!
//! This module defines the client contract the compatibility adapter
//! forwards to, plus the response types shared by concrete clients.
//! Currently ships one client:
//! - OpenAI-compatible endpoints (OpenAI, DeepSeek, Ollama, LM Studio, etc.)

pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{error::Result, options::CallOptions};

/// Token usage statistics
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Response from a chat completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Textual completion; absent when the provider returned no text
    pub content: Option<String>,

    /// Model that produced the completion, as reported by the provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Reason the model stopped generating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// Core trait for wrapped chat clients
///
/// Abstracts over the model-calling object that performs the actual request
/// to a chat-completion API. Implementations own their transport and
/// credentials; callers hand them a prompt plus an already-filtered option
/// set.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Identifying model name (e.g. "deepseek-chat")
    fn model_name(&self) -> &str;

    /// Perform one chat completion
    async fn invoke(&self, prompt: &str, options: &CallOptions) -> Result<ChatResponse>;
}
