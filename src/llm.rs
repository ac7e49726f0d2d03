//! Orchestrator-facing LLM capability surface
//!
//! Agent orchestration frameworks drive their models polymorphically: a
//! `call` taking a prompt plus keyword options, a model name for reporting,
//! and a fixed type identifier for diagnostics and dispatch. [`AgentLlm`]
//! models that surface as a trait so any compatible model object can be
//! dropped in.

use async_trait::async_trait;

use crate::{error::Result, options::CallOptions};

/// Capability interface an orchestration framework dispatches against
#[async_trait]
pub trait AgentLlm: Send + Sync {
    /// Fixed identifier for this LLM kind
    ///
    /// Returns the same literal across calls and instances.
    fn llm_type(&self) -> &'static str;

    /// Identifying model name for reporting
    fn model(&self) -> &str;

    /// Run one completion: prompt in, response text out
    async fn call(&self, prompt: &str, options: CallOptions) -> Result<String>;
}
