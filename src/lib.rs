//! Factory Insight - AI summaries for factory analytics data
//!
//! This crate implements a single-endpoint relay that turns dashboard
//! analytics payloads ("project" or "production" data) into concise
//! natural-language summaries via the Anthropic Messages API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
