//! Output reporters for assessment results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors and emoji
//! - `json` - Machine-readable JSON
//! - `markdown` - GitHub-flavored Markdown

mod json;
mod markdown;
mod text;

use crate::models::AssessmentResult;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Rendering switches shared by all formats
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub no_emoji: bool,
}

/// Render one assessment result
pub fn report(result: &AssessmentResult, format: OutputFormat, opts: RenderOptions) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(result, opts),
        OutputFormat::Json => json::render(result),
        OutputFormat::Markdown => markdown::render(result, opts),
    }
}

/// Render a list of saved assessments, oldest first
pub fn report_history(
    results: &[AssessmentResult],
    format: OutputFormat,
    opts: RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render_history(results, opts),
        OutputFormat::Json => json::render_history(results),
        OutputFormat::Markdown => markdown::render_history(results),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::assessment::ResponseSet;
    use crate::models::ParticipantInfo;
    use crate::scoring::BurnoutScorer;

    /// Create a realistic AssessmentResult for testing
    pub(crate) fn test_result() -> AssessmentResult {
        let responses = ResponseSet::from_raw([
            ("ex1", 5u8),
            ("ex2", 4),
            ("ex3", 4),
            ("md1", 3),
            ("md2", 3),
            ("md3", 3),
            ("ci1", 2),
            ("ci2", 3),
            ("ci3", 4),
        ]);
        let participant = ParticipantInfo::new(
            "Jordan Lee",
            "Platform",
            chrono::NaiveDate::from_ymd_opt(2026, 4, 2).unwrap(),
        );
        BurnoutScorer::new().assess(&responses, participant)
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("md").unwrap(),
            OutputFormat::Markdown
        );
        assert!(OutputFormat::from_str("sarif").is_err());
    }
}
