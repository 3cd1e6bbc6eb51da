//! HTTP routes for the analyze endpoint.

use axum::routing::any;
use axum::Router;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::HeaderName;
use tower_http::cors::{Any, CorsLayer};

use super::handlers::{analyze, AnalyzeAppState};

/// Permissive CORS for the dashboard callers: wildcard origin, any method,
/// and the enumerated request headers. The layer also answers preflights
/// before they reach the handler.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            CONTENT_TYPE,
        ])
}

/// Creates the analysis router with CORS attached.
pub fn analysis_routes(state: AnalyzeAppState) -> Router {
    Router::new()
        // any method: the endpoint distinguishes only preflight vs everything else
        .route("/analyze", any(analyze))
        .layer(cors_layer())
        .with_state(state)
}
