//! Application command handlers.

pub mod analysis;

pub use analysis::{AnalyzeDataCommand, AnalyzeDataHandler};
