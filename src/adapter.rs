//! Compatibility adapter between orchestration frameworks and chat clients
//!
//! Orchestration frameworks inject bookkeeping options ("callbacks",
//! "from_task", "from_agent") into every model call. Chat-completion APIs
//! that validate their request bodies reject those keys and the whole run
//! dies. [`FallbackLlm`] sits between the two: it strips the injected keys
//! and forwards only what the wrapped client understands.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::{BridgeError, Result},
    llm::AgentLlm,
    options::CallOptions,
    services::ChatClient,
};

/// Type identifier reported by [`FallbackLlm`]
pub const LLM_TYPE: &str = "fallback-chat";

/// Adapter exposing a wrapped [`ChatClient`] as an [`AgentLlm`]
///
/// Stateless across calls apart from the client reference and the model
/// name derived at construction; safe to share between concurrent callers
/// whenever the wrapped client is.
pub struct FallbackLlm {
    client: Arc<dyn ChatClient>,
    model: String,
}

impl std::fmt::Debug for FallbackLlm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackLlm")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl FallbackLlm {
    /// Wrap an already-configured chat client
    ///
    /// The identifying model name is derived from the client at
    /// construction time.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::InvalidClient`] when the client reports a
    /// blank model name.
    pub fn new(client: Arc<dyn ChatClient>) -> Result<Self> {
        let model = client.model_name().trim().to_string();
        if model.is_empty() {
            return Err(BridgeError::InvalidClient(
                "wrapped client reports no model name".to_string(),
            ));
        }
        Ok(Self { client, model })
    }
}

#[async_trait]
impl AgentLlm for FallbackLlm {
    fn llm_type(&self) -> &'static str {
        LLM_TYPE
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn call(&self, prompt: &str, mut options: CallOptions) -> Result<String> {
        let dropped = options.strip_blocked();
        if !dropped.is_empty() {
            tracing::debug!(
                model = %self.model,
                ?dropped,
                "removed options the wrapped client does not accept"
            );
        }

        let response = self.client.invoke(prompt, &options).await?;

        response.content.ok_or_else(|| BridgeError::MissingContent {
            model: self.model.clone(),
        })
    }
}
