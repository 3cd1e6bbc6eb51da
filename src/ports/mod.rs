//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod ai_provider;

pub use ai_provider::{AiError, AiProvider, CompletionRequest, CompletionResponse};
