//! HTTP handler for the analyze endpoint.
//!
//! Connects the axum route to the application layer. Every failure kind is
//! flattened to a 400 `{"error": message}` response; callers are trusted and
//! receive upstream error detail verbatim.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::{AnalyzeDataCommand, AnalyzeDataHandler};
use crate::domain::analysis::{AnalysisError, AnalysisKind};
use crate::ports::{AiError, AiProvider};

use super::dto::{AnalyzeRequest, AnalyzeResponse, ErrorResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Analyze API error that implements IntoResponse.
///
/// One flat boundary: every variant becomes status 400 with `{"error": ...}`,
/// regardless of whether the cause was bad input or an upstream outage.
pub enum AnalyzeApiError {
    /// Inbound body was not valid JSON (or lacked the `type` field).
    BadPayload(String),
    /// `type` was outside the closed enumeration.
    Analysis(AnalysisError),
    /// The provider call failed.
    Provider(AiError),
}

impl IntoResponse for AnalyzeApiError {
    fn into_response(self) -> axum::response::Response {
        let message = match self {
            AnalyzeApiError::BadPayload(msg) => msg,
            AnalyzeApiError::Analysis(err) => err.to_string(),
            AnalyzeApiError::Provider(err) => err.to_string(),
        };
        tracing::warn!(error = %message, "analyze request failed");
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<AnalysisError> for AnalyzeApiError {
    fn from(error: AnalysisError) -> Self {
        AnalyzeApiError::Analysis(error)
    }
}

impl From<AiError> for AnalyzeApiError {
    fn from(error: AiError) -> Self {
        AnalyzeApiError::Provider(error)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing the AI provider.
#[derive(Clone)]
pub struct AnalyzeAppState {
    pub provider: Arc<dyn AiProvider>,
}

impl AnalyzeAppState {
    pub fn new(provider: Arc<dyn AiProvider>) -> Self {
        Self { provider }
    }

    pub fn analyze_handler(&self) -> AnalyzeDataHandler {
        AnalyzeDataHandler::new(self.provider.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// /analyze
///
/// Accepts `{"type": "project" | "production", "data": <any JSON>}` and
/// returns `{"summary": <model text>}`. Preflights never reach this handler;
/// the CORS layer answers them. The body is parsed by hand rather than with
/// the `Json` extractor so malformed JSON flows through the same flat error
/// boundary as everything else.
pub async fn analyze(
    State(state): State<AnalyzeAppState>,
    body: Bytes,
) -> Result<Json<AnalyzeResponse>, AnalyzeApiError> {
    let request: AnalyzeRequest = serde_json::from_slice(&body)
        .map_err(|e| AnalyzeApiError::BadPayload(e.to_string()))?;

    let kind: AnalysisKind = request.kind.parse()?;

    tracing::debug!(kind = kind.as_str(), "handling analyze request");

    let handler = state.analyze_handler();
    let summary = handler
        .handle(AnalyzeDataCommand {
            kind,
            data: request.data,
        })
        .await?;

    Ok(Json(AnalyzeResponse { summary }))
}
