//! OpenAI-compatible chat client
//!
//! Works against:
//! - OpenAI official API
//! - OpenAI-compatible endpoints (DeepSeek, Ollama, LM Studio, etc.)

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};

use crate::{
    config::ClientConfig,
    error::{BridgeError, Result},
    options::CallOptions,
};

use super::{ChatClient, ChatResponse, Usage};

/// Chat client for OpenAI-compatible endpoints
pub struct OpenAiCompatClient {
    client: Client,
    config: ClientConfig,
    base_url: String,
}

impl OpenAiCompatClient {
    /// Create a new client from a configuration
    ///
    /// An empty `api_key` falls back to the `OPENAI_API_KEY` environment
    /// variable.
    ///
    /// # Errors
    ///
    /// Returns an error if no API key can be resolved or the key cannot be
    /// used as an HTTP header value.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let api_key = if config.api_key.is_empty() {
            std::env::var("OPENAI_API_KEY").map_err(|_| BridgeError::MissingApiKey {
                provider: "openai".to_string(),
            })?
        } else {
            config.api_key.clone()
        };

        let base_url = config.effective_base_url();

        let client = Client::builder()
            .default_headers({
                let mut headers = header::HeaderMap::new();
                headers.insert(
                    header::AUTHORIZATION,
                    header::HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|_| {
                        BridgeError::InvalidConfig("Invalid API key format".to_string())
                    })?,
                );
                headers
            })
            .build()?;

        Ok(Self {
            client,
            config,
            base_url,
        })
    }
}

#[async_trait]
impl ChatClient for OpenAiCompatClient {
    fn model_name(&self) -> &str {
        &self.config.model
    }

    async fn invoke(&self, prompt: &str, options: &CallOptions) -> Result<ChatResponse> {
        if prompt.trim().is_empty() {
            return Err(BridgeError::InvalidInput(
                "Prompt must not be empty".to_string(),
            ));
        }

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![RequestMessage {
                role: "user",
                content: prompt,
            }],
            options,
        };

        tracing::debug!(
            model = %self.config.model,
            option_count = options.len(),
            "sending chat completion request"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(BridgeError::Api {
                model: self.config.model.clone(),
                message: format!("HTTP {status}: {error_text}"),
            });
        }

        let api_response: ChatCompletion = response.json().await?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| BridgeError::Api {
                model: self.config.model.clone(),
                message: "No choices in response".to_string(),
            })?;

        Ok(ChatResponse {
            content: choice.message.content,
            model: Some(api_response.model),
            finish_reason: choice.finish_reason,
            usage: api_response.usage.map(|u| Usage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
        })
    }
}

// OpenAI-compatible wire types

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,

    // Caller-supplied options land at the top level of the body
    #[serde(flatten)]
    options: &'a CallOptions,
}

#[derive(Debug, Serialize)]
struct RequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    model: String,
    choices: Vec<ChatChoice>,
    usage: Option<WireUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: String) -> ClientConfig {
        ClientConfig::new("deepseek-chat", "test-key").with_base_url(base_url)
    }

    fn completion_body(content: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 0,
            "model": "deepseek-chat",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 3, "completion_tokens": 5, "total_tokens": 8}
        })
    }

    #[test]
    fn test_request_flattens_options_into_body() {
        let options: CallOptions = [
            ("temperature".to_string(), json!(0.5)),
            ("max_tokens".to_string(), json!(64)),
        ]
        .into_iter()
        .collect();

        let request = ChatRequest {
            model: "deepseek-chat",
            messages: vec![RequestMessage {
                role: "user",
                content: "ping",
            }],
            options: &options,
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "deepseek-chat",
                "messages": [{"role": "user", "content": "ping"}],
                "temperature": 0.5,
                "max_tokens": 64
            })
        );
    }

    #[tokio::test]
    async fn test_invoke_extracts_first_choice_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(json!({
                "model": "deepseek-chat",
                "messages": [{"role": "user", "content": "ping"}],
                "temperature": 0.5
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("hello")))
            .mount(&server)
            .await;

        let client = OpenAiCompatClient::new(test_config(server.uri())).unwrap();
        let mut options = CallOptions::new();
        options.insert("temperature", json!(0.5));

        let response = client.invoke("ping", &options).await.unwrap();

        assert_eq!(response.content.as_deref(), Some("hello"));
        assert_eq!(response.model.as_deref(), Some("deepseek-chat"));
        assert_eq!(response.finish_reason.as_deref(), Some("stop"));
        assert_eq!(response.usage.unwrap().total_tokens, 8);
    }

    #[tokio::test]
    async fn test_invoke_surfaces_api_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(400).set_body_string(r#"{"error": "bad request"}"#),
            )
            .mount(&server)
            .await;

        let client = OpenAiCompatClient::new(test_config(server.uri())).unwrap();
        let err = client.invoke("ping", &CallOptions::new()).await.unwrap_err();

        match err {
            BridgeError::Api { model, message } => {
                assert_eq!(model, "deepseek-chat");
                assert!(message.contains("400"));
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invoke_rejects_empty_choice_list() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-2",
                "object": "chat.completion",
                "created": 0,
                "model": "deepseek-chat",
                "choices": []
            })))
            .mount(&server)
            .await;

        let client = OpenAiCompatClient::new(test_config(server.uri())).unwrap();
        let err = client.invoke("ping", &CallOptions::new()).await.unwrap_err();

        assert!(matches!(err, BridgeError::Api { .. }));
    }

    #[tokio::test]
    async fn test_invoke_rejects_empty_prompt() {
        let client = OpenAiCompatClient::new(test_config("http://localhost:1".to_string())).unwrap();
        let err = client.invoke("   ", &CallOptions::new()).await.unwrap_err();

        assert!(matches!(err, BridgeError::InvalidInput(_)));
    }
}
