//! Factory Insight service entry point.

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use factory_insight::adapters::ai::{AnthropicConfig, AnthropicProvider};
use factory_insight::adapters::http::{analysis_routes, AnalyzeAppState};
use factory_insight::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.server.log_level)?)
        .init();

    if !config.ai.has_anthropic() {
        tracing::warn!("ANTHROPIC_API_KEY is not configured; analyze requests will be rejected");
    }

    let provider = AnthropicProvider::new(AnthropicConfig::from_config(&config.ai));
    let state = AnalyzeAppState::new(Arc::new(provider));

    let app = analysis_routes(state).layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr();
    tracing::info!(%addr, model = %config.ai.model, "factory-insight listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
