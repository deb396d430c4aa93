//! Text (terminal) reporter with colors and formatting

use super::RenderOptions;
use crate::models::{AssessmentResult, DimensionScore, RiskLevel};
use anyhow::Result;

/// Risk colors (ANSI escape codes)
fn risk_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "\x1b[32m",      // Green
        RiskLevel::Moderate => "\x1b[33m", // Yellow
        RiskLevel::High => "\x1b[31m",     // Red
    }
}

fn risk_emoji(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "🟢",
        RiskLevel::Moderate => "🟡",
        RiskLevel::High => "🔴",
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Render an assessment result as formatted terminal output
pub fn render(result: &AssessmentResult, opts: RenderOptions) -> Result<String> {
    let mut out = String::new();
    let level = result.risk_level;
    let risk_c = risk_color(level);

    // Header
    out.push_str(&format!("\n{BOLD}WorkSight Burnout Assessment{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    let participant = &result.participant;
    if !participant.full_name.is_empty() {
        out.push_str(&format!("Participant: {}", participant.full_name));
        if !participant.department.is_empty() {
            out.push_str(&format!(" ({})", participant.department));
        }
        out.push('\n');
    }
    out.push_str(&format!(
        "Completed: {}\n\n",
        result.completed_at.format("%Y-%m-%d %H:%M UTC")
    ));

    let badge = if opts.no_emoji {
        String::new()
    } else {
        format!("{} ", risk_emoji(level))
    };
    out.push_str(&format!(
        "{badge}Overall burnout risk: {risk_c}{BOLD}{} Risk{RESET}  Average score: {BOLD}{:.1}/5.0{RESET}\n\n",
        level, result.total_score
    ));

    // Dimension breakdown
    out.push_str(&format!("{BOLD}DIMENSIONS{RESET}\n"));
    for (dimension, score) in result.dimensions.iter() {
        out.push_str(&format!(
            "  {:<22} {}\n",
            dimension.title(),
            format_dimension(score)
        ));
    }
    out.push('\n');

    out.push_str(&format!("{BOLD}RECOMMENDATIONS{RESET}\n"));
    for rec in &result.recommendations {
        out.push_str(&format!("  • {}\n", rec));
    }
    out.push('\n');

    match level {
        RiskLevel::Low => out.push_str(&format!(
            "{DIM}Retake the assessment regularly to track how you are doing.{RESET}\n"
        )),
        RiskLevel::Moderate | RiskLevel::High => out.push_str(&format!(
            "{DIM}Run `worksight suggest` for small actions you can take today.{RESET}\n"
        )),
    }

    Ok(out)
}

/// Render saved assessments as a compact table
pub fn render_history(results: &[AssessmentResult], opts: RenderOptions) -> Result<String> {
    let mut out = String::new();
    out.push_str(&format!(
        "\n{BOLD}ASSESSMENT HISTORY{RESET} ({} total)\n",
        results.len()
    ));

    if results.is_empty() {
        out.push_str(&format!(
            "{DIM}No assessments yet. Run `worksight assess` to take one.{RESET}\n"
        ));
        return Ok(out);
    }

    out.push_str(&format!(
        "{DIM}  DATE              SCORE   RISK       EX   MD   CI   EI{RESET}\n"
    ));
    out.push_str(&format!(
        "{DIM}  ─────────────────────────────────────────────────────────{RESET}\n"
    ));
    for result in results {
        let level = result.risk_level;
        let marker = if opts.no_emoji {
            ""
        } else {
            risk_emoji(level)
        };
        let dims: Vec<String> = result
            .dimensions
            .iter()
            .map(|(_, s)| match s {
                DimensionScore::Scored { mean, .. } => format!("{:.1}", mean),
                DimensionScore::NoResponses => " -".to_string(),
            })
            .collect();
        out.push_str(&format!(
            "  {:<16}  {:>5.2}   {}{:<9}{RESET}{} {}\n",
            result.completed_at.format("%Y-%m-%d %H:%M"),
            result.total_score,
            risk_color(level),
            level.to_string(),
            marker,
            dims.join("  ")
        ));
    }
    Ok(out)
}

fn format_dimension(score: &DimensionScore) -> String {
    match score {
        DimensionScore::Scored { mean, responses } => format!(
            "{}{:.2}{RESET} {DIM}({} response{}){RESET}",
            risk_color(score.band()),
            mean,
            responses,
            if *responses == 1 { "" } else { "s" }
        ),
        DimensionScore::NoResponses => format!("{DIM}no responses{RESET}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_result;

    #[test]
    fn test_text_render_contains_sections() {
        let result = test_result();
        let out = render(&result, RenderOptions::default()).unwrap();
        assert!(out.contains("WorkSight Burnout Assessment"));
        assert!(out.contains("Participant: Jordan Lee (Platform)"));
        assert!(out.contains("Low Risk"));
        assert!(out.contains("Mental Distance"));
        assert!(out.contains("no responses"));
        assert!(out.contains("Continue maintaining healthy work habits"));
    }

    #[test]
    fn test_text_render_no_emoji() {
        let result = test_result();
        let with = render(&result, RenderOptions::default()).unwrap();
        let without = render(&result, RenderOptions { no_emoji: true }).unwrap();
        assert!(with.contains("🟢"));
        assert!(!without.contains("🟢"));
    }

    #[test]
    fn test_text_history() {
        let result = test_result();
        let out = render_history(&[result.clone(), result], RenderOptions::default()).unwrap();
        assert!(out.contains("(2 total)"));
        assert!(out.contains("2.58"));
        assert!(out.contains("4.3"));

        let empty = render_history(&[], RenderOptions::default()).unwrap();
        assert!(empty.contains("No assessments yet"));
    }
}
