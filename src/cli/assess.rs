//! Assess, history and questions commands

use super::prompt::Prompter;
use super::Session;
use crate::assessment::{
    questions_for, AssessmentFlow, ResponseSet, MAX_RATING, MIN_RATING, QUESTIONS, SCALE,
};
use crate::models::{Dimension, ParticipantInfo};
use crate::reporters;
use crate::scoring::BurnoutScorer;
use crate::storage::AssessmentStore;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use console::style;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing::debug;

pub(crate) struct AssessArgs {
    pub name: Option<String>,
    pub department: Option<String>,
    pub date: Option<NaiveDate>,
    pub answers: Vec<String>,
    pub answers_file: Option<PathBuf>,
    pub partial: bool,
    pub format: Option<String>,
    pub no_emoji: bool,
}

/// Print the question catalogue grouped by dimension
pub fn questions(json: bool) -> Result<()> {
    if json {
        let doc = serde_json::json!({
            "scale": SCALE,
            "questions": QUESTIONS,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("\n{}\n", style("Burnout Assessment Questions").bold());
    for dimension in Dimension::ALL {
        println!("{}", style(dimension.title().to_uppercase()).bold());
        for question in questions_for(dimension) {
            println!("  {}  {}", style(question.id).cyan(), question.text);
        }
        println!();
    }
    let scale: Vec<String> = SCALE
        .iter()
        .map(|o| format!("{} = {}", o.value, o.label))
        .collect();
    println!("{} {}", style("Scale:").dim(), scale.join(", "));
    Ok(())
}

pub fn run(session: &Session, args: AssessArgs) -> Result<()> {
    let format = session.format(args.format.as_deref())?;
    let opts = session.render_options(args.no_emoji);
    // Fall back to the name remembered from the last assessment
    let name = args.name.or_else(|| {
        let remembered = session.state().load().user_name;
        (!remembered.trim().is_empty()).then_some(remembered)
    });
    let participant = ParticipantInfo::new(
        name.unwrap_or_default(),
        args.department.unwrap_or_default(),
        args.date.unwrap_or(session.today),
    );

    let file_answers = match &args.answers_file {
        Some(path) => read_answers_file(path)?,
        None => BTreeMap::new(),
    };

    if args.partial {
        let mut responses = ResponseSet::new();
        for (id, rating) in &file_answers {
            responses.record(id, *rating)?;
        }
        for pair in &args.answers {
            responses.record_pair(pair)?;
        }
        let result = BurnoutScorer::new().assess(&responses, participant);
        eprintln!(
            "{}",
            style(format!(
                "Preview only: {} of {} questions answered, result not saved.",
                responses.answered(),
                QUESTIONS.len()
            ))
            .yellow()
        );
        print!("{}", reporters::report(&result, format, opts)?);
        return Ok(());
    }

    let mut flow = AssessmentFlow::new(participant);
    flow.start()?;
    for (id, rating) in &file_answers {
        flow.answer(id, *rating)?;
    }
    for pair in &args.answers {
        flow.answer_pair(pair)?;
    }

    if !flow.can_complete() {
        ask_missing(&mut flow, &mut Prompter::stdin())?;
    }

    let mut store = session.history();
    let result = flow.complete(&mut store)?;
    let full_name = result.participant.full_name.clone();
    session.state().update(|state| {
        state.user_name = full_name;
        Ok(())
    })?;
    print!("{}", reporters::report(result, format, opts)?);
    Ok(())
}

/// Prompt for every unanswered question until answered or input runs out
fn ask_missing<R: BufRead>(flow: &mut AssessmentFlow, prompter: &mut Prompter<R>) -> Result<()> {
    let scale: Vec<String> = SCALE
        .iter()
        .map(|o| format!("{}={}", o.value, o.label))
        .collect();
    eprintln!("{}", style(scale.join("  ")).dim());

    for id in flow.responses().missing() {
        let Some(question) = QUESTIONS.iter().find(|q| q.id == id) else {
            continue;
        };
        let (answered, total) = flow.progress();
        let prompt = format!(
            "[{}/{}] {} ({}-{}):",
            answered + 1,
            total,
            question.text,
            MIN_RATING,
            MAX_RATING
        );
        loop {
            let Some(line) = prompter.read_answer(&prompt)? else {
                // Out of input; `complete` reports what is missing
                return Ok(());
            };
            let recorded = line
                .parse::<i64>()
                .map_err(|_| format!("'{}' is not a number", line))
                .and_then(|rating| flow.answer(id, rating).map_err(|e| e.to_string()));
            match recorded {
                Ok(()) => break,
                Err(msg) => prompter.note(&msg),
            }
        }
    }
    Ok(())
}

/// Read a `{"ex1": 4, ...}` answers file
fn read_answers_file(path: &Path) -> Result<BTreeMap<String, i64>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read answers file {}", path.display()))?;
    let answers: BTreeMap<String, i64> = serde_json::from_str(&content)
        .with_context(|| format!("{} must be a JSON object of question ids to ratings", path.display()))?;
    debug!("Read {} answers from {}", answers.len(), path.display());
    Ok(answers)
}

pub fn history(session: &Session, format: Option<&str>, last: Option<usize>, no_emoji: bool) -> Result<()> {
    let format = session.format(format)?;
    let store = session.history();
    let mut results = store.load_history()?;
    if let Some(n) = last {
        let skip = results.len().saturating_sub(n);
        results.drain(..skip);
    }
    print!(
        "{}",
        reporters::report_history(&results, format, session.render_options(no_emoji))?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn started_flow() -> AssessmentFlow {
        let mut flow = AssessmentFlow::new(ParticipantInfo::new(
            "Sam",
            "",
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        ));
        flow.start().unwrap();
        flow
    }

    #[test]
    fn test_ask_missing_retries_invalid_input() {
        let mut flow = started_flow();
        for q in QUESTIONS.iter().skip(1) {
            flow.answer(q.id, 2).unwrap();
        }
        let mut prompter = Prompter::new("abc\n9\n5\n".as_bytes());
        ask_missing(&mut flow, &mut prompter).unwrap();
        assert!(flow.can_complete());
        assert_eq!(flow.responses().get("ex1"), Some(5));
    }

    #[test]
    fn test_ask_missing_stops_at_end_of_input() {
        let mut flow = started_flow();
        let mut prompter = Prompter::new("3\n4\n".as_bytes());
        ask_missing(&mut flow, &mut prompter).unwrap();
        assert_eq!(flow.progress(), (2, 12));
    }

    #[test]
    fn test_read_answers_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("answers.json");
        std::fs::write(&path, r#"{"ex1": 4, "md2": 2}"#).unwrap();
        let answers = read_answers_file(&path).unwrap();
        assert_eq!(answers.get("ex1"), Some(&4));
        assert_eq!(answers.len(), 2);

        std::fs::write(&path, "[1, 2]").unwrap();
        assert!(read_answers_file(&path).is_err());
    }
}
