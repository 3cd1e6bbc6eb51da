//! AnalyzeDataHandler - Command handler for summarizing factory data.
//!
//! Builds the prompt for the requested analysis kind and forwards it to the
//! AI provider. One call, no retries; whatever text the provider returns is
//! the summary.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::analysis::{build_prompt, AnalysisKind};
use crate::ports::{AiError, AiProvider, CompletionRequest};

/// Command to summarize one analytics payload.
#[derive(Debug, Clone)]
pub struct AnalyzeDataCommand {
    /// Which dashboard view the payload belongs to.
    pub kind: AnalysisKind,
    /// Opaque analytics payload, embedded verbatim into the prompt.
    pub data: Value,
}

/// Handler for summarizing analytics payloads.
pub struct AnalyzeDataHandler {
    provider: Arc<dyn AiProvider>,
}

impl AnalyzeDataHandler {
    pub fn new(provider: Arc<dyn AiProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle(&self, command: AnalyzeDataCommand) -> Result<String, AiError> {
        let prompt = build_prompt(command.kind, &command.data);
        let response = self.provider.complete(CompletionRequest::new(prompt)).await?;
        Ok(response.text)
    }
}
