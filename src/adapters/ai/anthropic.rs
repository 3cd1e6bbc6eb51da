//! Anthropic Provider - Implementation of AiProvider for Anthropic's Claude API.
//!
//! Issues a single non-streaming POST to the Messages endpoint per completion.
//!
//! # Configuration
//!
//! ```ignore
//! let config = AnthropicConfig::new()
//!     .with_api_key(api_key)
//!     .with_model("claude-haiku-4-5-20251001");
//!
//! let provider = AnthropicProvider::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::AiConfig;
use crate::ports::{AiError, AiProvider, CompletionRequest, CompletionResponse};

/// Anthropic API version header value.
const ANTHROPIC_API_VERSION: &str = "2023-06-01";

/// Placeholder summary returned when the upstream response carries no
/// extractable text. Substituted silently; never surfaced as an error.
pub const FALLBACK_SUMMARY: &str = "分析暂时不可用";

/// Configuration for the Anthropic provider.
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    /// API key for authentication. Checked per request, not at construction.
    api_key: Option<Secret<String>>,
    /// Model to use (e.g., "claude-haiku-4-5-20251001").
    pub model: String,
    /// Base URL for the API (default: https://api.anthropic.com).
    pub base_url: String,
    /// Output token bound applied when the request does not set one.
    pub max_tokens: u32,
    /// Request timeout.
    pub timeout: Duration,
}

impl AnthropicConfig {
    /// Creates a configuration with default settings and no API key.
    pub fn new() -> Self {
        Self {
            api_key: None,
            model: "claude-haiku-4-5-20251001".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            max_tokens: 400,
            timeout: Duration::from_secs(60),
        }
    }

    /// Creates a configuration from the application AI config section.
    pub fn from_config(config: &AiConfig) -> Self {
        Self {
            api_key: config
                .anthropic_api_key
                .as_ref()
                .filter(|k| !k.is_empty())
                .map(|k| Secret::new(k.clone())),
            model: config.model.clone(),
            base_url: config.base_url.clone(),
            max_tokens: config.max_tokens,
            timeout: config.timeout(),
        }
    }

    /// Sets the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the output token bound.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> Option<&str> {
        self.api_key.as_ref().map(|k| k.expose_secret().as_str())
    }
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Anthropic API provider implementation.
pub struct AnthropicProvider {
    config: AnthropicConfig,
    client: Client,
}

impl AnthropicProvider {
    /// Creates a new Anthropic provider with the given configuration.
    pub fn new(config: AnthropicConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the messages endpoint URL.
    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.config.base_url)
    }

    /// Converts our request to Anthropic's format.
    fn to_messages_request(&self, request: &CompletionRequest) -> MessagesRequest {
        MessagesRequest {
            model: self.config.model.clone(),
            max_tokens: request.max_tokens.unwrap_or(self.config.max_tokens),
            messages: vec![WireMessage {
                role: "user".to_string(),
                content: request.prompt.clone(),
            }],
        }
    }

    /// Sends the request, failing before any network I/O when no key is set.
    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AiError> {
        let api_key = self.config.api_key().ok_or(AiError::ApiKeyMissing)?;
        let messages_request = self.to_messages_request(request);

        self.client
            .post(self.messages_url())
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .header("Content-Type", "application/json")
            .json(&messages_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AiError::network(format!("Connection failed: {}", e))
                } else {
                    AiError::network(e.to_string())
                }
            })
    }

    /// Parses the API response, surfacing non-success bodies verbatim.
    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::upstream(body));
        }

        let messages_response: MessagesResponse = response
            .json()
            .await
            .map_err(|e| AiError::parse(format!("Failed to parse response: {}", e)))?;

        Ok(CompletionResponse {
            text: extract_text(messages_response),
        })
    }
}

#[async_trait]
impl AiProvider for AnthropicProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AiError> {
        let response = self.send_request(&request).await?;
        self.parse_response(response).await
    }
}

/// Pulls the first content block's text, falling back to the fixed
/// placeholder when it is absent.
fn extract_text(response: MessagesResponse) -> String {
    response
        .content
        .into_iter()
        .next()
        .and_then(|block| block.text)
        .unwrap_or_else(|| FALLBACK_SUMMARY.to_string())
}

// ----- Anthropic API Types -----

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<WireMessage>,
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_works() {
        let config = AnthropicConfig::new()
            .with_api_key("test-key")
            .with_model("claude-haiku-4-5-20251001")
            .with_base_url("https://custom.api.com")
            .with_max_tokens(200)
            .with_timeout(Duration::from_secs(30));

        assert_eq!(config.model, "claude-haiku-4-5-20251001");
        assert_eq!(config.base_url, "https://custom.api.com");
        assert_eq!(config.max_tokens, 200);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.api_key(), Some("test-key"));
    }

    #[test]
    fn from_config_ignores_empty_key() {
        let app_config = AiConfig {
            anthropic_api_key: Some(String::new()),
            ..Default::default()
        };
        let config = AnthropicConfig::from_config(&app_config);
        assert!(config.api_key().is_none());
    }

    #[test]
    fn request_body_carries_model_and_bound() {
        let provider = AnthropicProvider::new(
            AnthropicConfig::new().with_api_key("k").with_max_tokens(400),
        );
        let request = CompletionRequest::new("分析一下");

        let body = provider.to_messages_request(&request);
        assert_eq!(body.model, "claude-haiku-4-5-20251001");
        assert_eq!(body.max_tokens, 400);
        assert_eq!(body.messages.len(), 1);
        assert_eq!(body.messages[0].role, "user");
        assert_eq!(body.messages[0].content, "分析一下");
    }

    #[test]
    fn request_bound_overrides_config_bound() {
        let provider = AnthropicProvider::new(
            AnthropicConfig::new().with_api_key("k").with_max_tokens(400),
        );
        let request = CompletionRequest::new("hi").with_max_tokens(100);

        assert_eq!(provider.to_messages_request(&request).max_tokens, 100);
    }

    #[test]
    fn extract_text_takes_first_block() {
        let response: MessagesResponse = serde_json::from_str(
            r#"{"content":[{"type":"text","text":"质量稳定。"},{"type":"text","text":"ignored"}]}"#,
        )
        .unwrap();

        assert_eq!(extract_text(response), "质量稳定。");
    }

    #[test]
    fn extract_text_falls_back_when_text_missing() {
        let response: MessagesResponse =
            serde_json::from_str(r#"{"content":[{"type":"tool_use"}]}"#).unwrap();

        assert_eq!(extract_text(response), FALLBACK_SUMMARY);
    }

    #[test]
    fn extract_text_falls_back_on_empty_content() {
        let response: MessagesResponse = serde_json::from_str(r#"{"content":[]}"#).unwrap();
        assert_eq!(extract_text(response), FALLBACK_SUMMARY);

        let response: MessagesResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(extract_text(response), FALLBACK_SUMMARY);
    }

    #[tokio::test]
    async fn missing_api_key_short_circuits() {
        // Unroutable base_url: if the key check did not come first, this
        // would fail with a connection error instead.
        let provider = AnthropicProvider::new(
            AnthropicConfig::new().with_base_url("http://127.0.0.1:9"),
        );

        let err = provider
            .complete(CompletionRequest::new("hello"))
            .await
            .unwrap_err();

        assert!(matches!(err, AiError::ApiKeyMissing));
        assert_eq!(err.to_string(), "API key not configured");
    }
}
