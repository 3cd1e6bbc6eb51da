//! Adapters - implementations of ports against external services.

pub mod ai;
pub mod http;
