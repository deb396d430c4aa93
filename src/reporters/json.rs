//! JSON reporter
//!
//! Outputs assessment results as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or further processing.

use crate::models::AssessmentResult;
use anyhow::Result;

/// Render one result as JSON
pub fn render(result: &AssessmentResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render a history as a JSON array
pub fn render_history(results: &[AssessmentResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_result;

    #[test]
    fn test_json_render_valid() {
        let result = test_result();
        let json_str = render(&result).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["risk_level"], "Low");
        assert_eq!(parsed["dimensions"]["emotional_impairment"]["status"], "no-responses");
        assert_eq!(parsed["recommendations"].as_array().expect("array").len(), 4);
    }

    #[test]
    fn test_json_round_trips() {
        let result = test_result();
        let json_str = render(&result).unwrap();
        let back: AssessmentResult = serde_json::from_str(&json_str).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_json_empty_history() {
        let json_str = render_history(&[]).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed.as_array().expect("array").len(), 0);
    }
}
