//! HTTP DTOs for the analyze endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound analyze request.
///
/// `data` carries whatever the dashboard sends; it is embedded into the
/// prompt verbatim, so no shape is enforced. A missing `data` field renders
/// as JSON `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    /// Discriminator: "project" or "production".
    #[serde(rename = "type")]
    pub kind: String,

    /// Opaque analytics payload.
    #[serde(default)]
    pub data: Value,
}

/// Successful analyze response.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub summary: String,
}

/// Error response. Mutually exclusive with [`AnalyzeResponse`].
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
