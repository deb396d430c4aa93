//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Handy for pasting a result into a journal, a wiki page or a message to
//! whoever you are talking the result through with.

use super::RenderOptions;
use crate::models::{AssessmentResult, DimensionScore, RiskLevel};
use anyhow::Result;

/// Render an assessment result as Markdown
pub fn render(result: &AssessmentResult, opts: RenderOptions) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(result, opts));
    md.push('\n');
    md.push_str(&render_dimensions(result));
    md.push('\n');
    md.push_str(&render_recommendations(result));
    md.push('\n');
    md.push_str(&render_footer());

    Ok(md)
}

/// Render saved assessments as a Markdown table
pub fn render_history(results: &[AssessmentResult]) -> Result<String> {
    let mut md = String::from("## Assessment History\n\n");
    if results.is_empty() {
        md.push_str("_No assessments recorded yet._\n");
        return Ok(md);
    }

    md.push_str("| Completed | Participant | Score | Risk |\n");
    md.push_str("|-----------|-------------|------:|------|\n");
    for result in results {
        let name = if result.participant.full_name.is_empty() {
            "-"
        } else {
            result.participant.full_name.as_str()
        };
        md.push_str(&format!(
            "| {} | {} | {:.2} | {} |\n",
            result.completed_at.format("%Y-%m-%d %H:%M"),
            escape_cell(name),
            result.total_score,
            result.risk_level
        ));
    }
    Ok(md)
}

fn render_header(result: &AssessmentResult, opts: RenderOptions) -> String {
    let risk_emoji = match result.risk_level {
        RiskLevel::Low => "✅",
        RiskLevel::Moderate => "⚠️",
        RiskLevel::High => "🚨",
    };
    let title = if opts.no_emoji {
        "# Burnout Assessment Results".to_string()
    } else {
        format!("# {} Burnout Assessment Results", risk_emoji)
    };

    let mut header = format!(
        "{}\n\n**Risk: {}** | **Average score: {:.2}/5.0**\n\n",
        title, result.risk_level, result.total_score
    );
    let participant = &result.participant;
    if !participant.full_name.is_empty() {
        header.push_str(&format!("- **Participant:** {}\n", participant.full_name));
    }
    if !participant.department.is_empty() {
        header.push_str(&format!("- **Department:** {}\n", participant.department));
    }
    header.push_str(&format!("- **Date:** {}\n", participant.date));
    header.push_str(&format!(
        "- **Completed:** {}\n",
        result.completed_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    header
}

fn render_dimensions(result: &AssessmentResult) -> String {
    let mut md = String::from("## Dimensions\n\n| Dimension | Score | Responses | Band |\n");
    md.push_str("|-----------|------:|----------:|------|\n");
    for (dimension, score) in result.dimensions.iter() {
        match score {
            DimensionScore::Scored { mean, responses } => md.push_str(&format!(
                "| {} | {:.2} | {} | {} |\n",
                dimension.title(),
                mean,
                responses,
                score.band()
            )),
            DimensionScore::NoResponses => md.push_str(&format!(
                "| {} | - | 0 | no responses |\n",
                dimension.title()
            )),
        }
    }
    md
}

fn render_recommendations(result: &AssessmentResult) -> String {
    let mut md = String::from("## Recommendations\n\n");
    for rec in &result.recommendations {
        md.push_str(&format!("- {}\n", rec));
    }
    md
}

fn render_footer() -> String {
    "---\n\n_This self-check is not a diagnosis. If you are struggling, talk to someone you trust._\n"
        .to_string()
}

/// Escape pipe characters so names can't break the table
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
