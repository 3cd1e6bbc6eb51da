//! Analysis kinds and prompt templates.
//!
//! The relay understands exactly two payload kinds, one per dashboard view:
//! `project` (milestone/progress data) and `production` (quality/output data).
//! Each kind maps to a fixed Chinese-language instruction asking the model for
//! a concise 3-5 sentence assessment, followed by a pretty-printed dump of the
//! caller's data. The data itself is opaque; no schema is enforced.

use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

/// Closed set of payload kinds the relay understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisKind {
    /// Project milestone/progress data.
    Project,
    /// Production quality/output data.
    Production,
}

/// Errors raised while interpreting an analysis request.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The `type` discriminator is outside the closed enumeration.
    #[error("Unknown analysis type: {0}")]
    UnknownKind(String),
}

impl AnalysisKind {
    /// Wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::Project => "project",
            AnalysisKind::Production => "production",
        }
    }
}

impl FromStr for AnalysisKind {
    type Err = AnalysisError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "project" => Ok(AnalysisKind::Project),
            "production" => Ok(AnalysisKind::Production),
            other => Err(AnalysisError::UnknownKind(other.to_string())),
        }
    }
}

const PROJECT_INSTRUCTION: &str =
    "你是一个智能工厂管理助手。请分析以下项目数据，用中文给出简洁的进度评估、风险提示和改善建议（3-5句话）：";

const PRODUCTION_INSTRUCTION: &str =
    "你是一个智能工厂管理助手。请分析以下生产数据，用中文给出简洁的质量趋势分析和改善建议（3-5句话）：";

/// Builds the user prompt for the given kind.
///
/// The payload is rendered as indented JSON so the model sees it the way a
/// human reviewer would.
pub fn build_prompt(kind: AnalysisKind, data: &Value) -> String {
    let rendered = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
    let instruction = match kind {
        AnalysisKind::Project => PROJECT_INSTRUCTION,
        AnalysisKind::Production => PRODUCTION_INSTRUCTION,
    };
    format!("{}\n{}", instruction, rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_accepts_known_kinds() {
        assert_eq!("project".parse::<AnalysisKind>().unwrap(), AnalysisKind::Project);
        assert_eq!(
            "production".parse::<AnalysisKind>().unwrap(),
            AnalysisKind::Production
        );
    }

    #[test]
    fn parse_rejects_unknown_kind_with_value() {
        let err = "maintenance".parse::<AnalysisKind>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown analysis type: maintenance");
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("Project".parse::<AnalysisKind>().is_err());
    }

    #[test]
    fn as_str_round_trips() {
        for kind in [AnalysisKind::Project, AnalysisKind::Production] {
            assert_eq!(kind.as_str().parse::<AnalysisKind>().unwrap(), kind);
        }
    }

    #[test]
    fn prompt_embeds_pretty_printed_data_verbatim() {
        let data = json!({
            "name": "冲压车间改造",
            "progress": 62,
            "milestones": [{"title": "设备进场", "done": true}]
        });

        let prompt = build_prompt(AnalysisKind::Project, &data);
        let rendered = serde_json::to_string_pretty(&data).unwrap();

        assert!(prompt.contains(&rendered));
        assert!(prompt.ends_with(&rendered));
    }

    #[test]
    fn prompt_instruction_differs_per_kind() {
        let data = json!({"defect_rate": 0.021});

        let project = build_prompt(AnalysisKind::Project, &data);
        let production = build_prompt(AnalysisKind::Production, &data);

        assert_ne!(project, production);
        assert!(project.contains("项目数据"));
        assert!(production.contains("生产数据"));
    }

    #[test]
    fn prompt_renders_null_data() {
        let prompt = build_prompt(AnalysisKind::Production, &Value::Null);
        assert!(prompt.ends_with("null"));
    }
}
