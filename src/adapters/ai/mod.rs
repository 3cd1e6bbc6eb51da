//! AI Provider Adapters.
//!
//! Implementations of the AiProvider port.
//!
//! ## Available Adapters
//!
//! - `AnthropicProvider` - Anthropic Claude models via the Messages API
//! - `MockAiProvider` - Configurable mock for testing

mod anthropic;
mod mock;

pub use anthropic::{AnthropicConfig, AnthropicProvider, FALLBACK_SUMMARY};
pub use mock::{MockAiProvider, MockError, MockResponse};
