//! Daily check-in command

use super::prompt::Prompter;
use super::Session;
use crate::wellness::{
    CheckInKind, CheckInQuestion, CheckInWizard, WizardProgress, CHECK_IN_QUESTIONS,
};
use anyhow::{bail, Result};
use console::style;
use std::io::BufRead;
use tracing::info;

/// Run the wizard. Answers given as flags are used as-is, the rest are prompted for.
pub fn run(session: &Session, given: [(&'static str, Option<String>); 4]) -> Result<()> {
    let store = session.state();
    let state = store.load();
    if !state.check_in.is_due(session.today) {
        println!(
            "✅ Already checked in today. Run {} to take it again.",
            style("worksight checkin reset").cyan()
        );
        return Ok(());
    }

    let mut wizard = CheckInWizard::new();
    for (id, value) in &given {
        if let Some(value) = value {
            wizard.set_answer(id, value)?;
        }
    }
    drive_wizard(&mut wizard, &mut Prompter::stdin())?;

    let answers = wizard.into_answers();
    let today = session.today;
    store.update(|state| {
        state.check_in.complete(answers.clone(), today);
        Ok(())
    })?;
    info!("Daily check-in completed for {}", today);

    println!("\n✅ Check-in complete for {}", today);
    print_answers(&answers);
    Ok(())
}

/// Walk the wizard to the end, asking for anything not yet answered.
/// Typing `back` returns to the previous question.
fn drive_wizard<R: BufRead>(wizard: &mut CheckInWizard, prompter: &mut Prompter<R>) -> Result<()> {
    let mut revisit = false;
    loop {
        let question = wizard.current_question();
        if revisit || !wizard.answers().contains_key(question.id) {
            let prompt = format!(
                "[{}/{}] {}{}",
                wizard.step() + 1,
                CHECK_IN_QUESTIONS.len(),
                question.question,
                hint(question)
            );
            let Some(line) = prompter.read_answer(&prompt)? else {
                bail!("Check-in cancelled: no answer for '{}'", question.id);
            };
            if line.eq_ignore_ascii_case("back") {
                wizard.previous();
                revisit = true;
                continue;
            }
            if let Err(e) = wizard.answer(&resolve_choice(question, &line)) {
                prompter.note(&e.to_string());
                continue;
            }
        }
        revisit = false;
        if wizard.next()? == WizardProgress::Finished {
            return Ok(());
        }
    }
}

fn hint(question: &CheckInQuestion) -> String {
    match question.kind {
        CheckInKind::Select(options) => {
            let numbered: Vec<String> = options
                .iter()
                .enumerate()
                .map(|(i, o)| format!("{}) {}", i + 1, o))
                .collect();
            format!("\n    {}\n   >", numbered.join("  "))
        }
        _ => match question.placeholder {
            Some(placeholder) => format!(" ({})", placeholder),
            None => String::new(),
        },
    }
}

/// Let select questions be answered by option number
fn resolve_choice(question: &CheckInQuestion, input: &str) -> String {
    if let CheckInKind::Select(options) = question.kind {
        if let Ok(n) = input.parse::<usize>() {
            if let Some(option) = n.checked_sub(1).and_then(|i| options.get(i)) {
                return option.to_string();
            }
        }
    }
    input.to_string()
}

pub fn status(session: &Session) -> Result<()> {
    let state = session.state().load();
    let check_in = &state.check_in;
    if check_in.is_due(session.today) {
        println!("📝 Today's check-in is due. Run {}", style("worksight checkin").cyan());
    } else {
        println!("✅ Checked in today");
    }
    if let Some(date) = check_in.last_check_in_date {
        println!("   Last check-in: {}", date);
        print_answers(&check_in.answers);
    }
    Ok(())
}

pub fn reset(session: &Session) -> Result<()> {
    session.state().update(|state| {
        state.check_in.reset();
        Ok(())
    })?;
    println!("Check-in reset. Run {} to take it again.", style("worksight checkin").cyan());
    Ok(())
}

fn print_answers(answers: &std::collections::BTreeMap<String, String>) {
    for question in CHECK_IN_QUESTIONS.iter() {
        if let Some(answer) = answers.get(question.id) {
            println!("   {:<8} {}", style(question.id).dim(), answer);
        }
    }
}
