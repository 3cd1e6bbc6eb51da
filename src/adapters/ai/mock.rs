//! Mock AI Provider for testing.
//!
//! Provides a configurable mock implementation of the AiProvider port,
//! allowing tests to run without calling the real API.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAiProvider::new().with_text("进度正常。");
//!
//! let response = provider.complete(request).await?;
//! assert_eq!(response.text, "进度正常。");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{AiError, AiProvider, CompletionRequest, CompletionResponse};

/// Mock AI provider for testing.
///
/// Configurable to return specific texts or inject errors; records every
/// request it receives for verification.
#[derive(Debug, Clone, Default)]
pub struct MockAiProvider {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful completion with this text.
    Text(String),
    /// Return an error.
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate a missing credential.
    ApiKeyMissing,
    /// Simulate a non-success upstream response.
    Upstream { body: String },
    /// Simulate a network error.
    Network { message: String },
}

impl From<MockError> for AiError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::ApiKeyMissing => AiError::ApiKeyMissing,
            MockError::Upstream { body } => AiError::upstream(body),
            MockError::Network { message } => AiError::network(message),
        }
    }
}

impl MockAiProvider {
    /// Creates a new mock provider with an empty response queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a successful text response to the queue.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Text(text.into()));
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: MockError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(MockResponse::Error(error));
        self
    }

    /// Returns all requests received so far.
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns how many requests were received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AiError> {
        self.calls.lock().unwrap().push(request);

        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(MockResponse::Text(text)) => Ok(CompletionResponse { text }),
            Some(MockResponse::Error(err)) => Err(err.into()),
            None => Err(AiError::network("mock response queue is empty".to_string())),
        }
    }
}
