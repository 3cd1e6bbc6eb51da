//! Analysis handlers.

mod analyze_data;

pub use analyze_data::{AnalyzeDataCommand, AnalyzeDataHandler};
