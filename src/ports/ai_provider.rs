//! AI Provider Port - Interface for the LLM completion call.
//!
//! Abstracts the single outbound interaction this service performs: handing a
//! prompt to an LLM provider and getting text back. Implementations translate
//! between this contract and the provider-specific wire format.
//!
//! # Design
//!
//! - One-shot, non-streaming completion only
//! - Implementations substitute a fixed placeholder when the upstream response
//!   carries no extractable text, rather than failing
//! - No retries: a failed call is surfaced to the caller as-is

use async_trait::async_trait;
use thiserror::Error;

/// Port for LLM provider interactions.
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Generate a single completion for the given request.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AiError>;
}

/// Request for an AI completion.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// The full user prompt.
    pub prompt: String,
    /// Maximum tokens to generate; the provider's configured bound applies
    /// when unset.
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// Creates a new completion request for the given prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: None,
        }
    }

    /// Sets the maximum tokens to generate.
    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }
}

/// Response from an AI completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    /// Generated text (or the provider's placeholder when the upstream
    /// response carried none).
    pub text: String,
}

/// AI provider errors.
///
/// The HTTP layer flattens every variant to the same 400 response; the
/// variants exist so logs and tests can tell the failure modes apart.
#[derive(Debug, Error)]
pub enum AiError {
    /// No credential configured for the provider.
    #[error("API key not configured")]
    ApiKeyMissing,

    /// Provider responded with a non-success status; carries the raw body.
    #[error("Claude API error: {body}")]
    Upstream {
        /// Raw upstream response body, surfaced verbatim to the caller.
        body: String,
    },

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse a successful provider response.
    #[error("parse error: {0}")]
    Parse(String),
}

impl AiError {
    /// Creates an upstream error carrying the raw response body.
    pub fn upstream(body: impl Into<String>) -> Self {
        Self::Upstream { body: body.into() }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
