//! Minimal end-to-end run: wrap a DeepSeek-backed client and ask one question
//!
//! Requires `DEEPSEEK_API_KEY` in the environment or a `.env` file:
//!
//! ```sh
//! cargo run --example quickstart
//! ```

use std::sync::Arc;

use color_eyre::Result;
use serde_json::json;

use llm_bridge::{AgentLlm, CallOptions, ClientConfig, FallbackLlm, OpenAiCompatClient};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter("llm_bridge=debug")
        .init();

    let config = ClientConfig::deepseek("deepseek-chat")?;
    let client = Arc::new(OpenAiCompatClient::new(config)?);
    let llm = FallbackLlm::new(client)?;

    // The kind of option bag an orchestrator hands over, bookkeeping keys
    // included. Only temperature survives the filter.
    let mut options = CallOptions::new();
    options.insert("temperature", json!(0.0));
    options.insert("callbacks", json!([]));
    options.insert("from_agent", json!("philosopher"));

    let answer = llm
        .call("Answer in one Socratic sentence: what is AI?", options)
        .await?;

    println!("{answer}");

    Ok(())
}
