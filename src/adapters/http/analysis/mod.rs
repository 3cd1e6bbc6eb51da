//! HTTP adapter for the analyze endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{AnalyzeRequest, AnalyzeResponse, ErrorResponse};
pub use handlers::{analyze, AnalyzeApiError, AnalyzeAppState};
pub use routes::{analysis_routes, cors_layer};
