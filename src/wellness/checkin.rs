//! Daily check-in wizard
//!
//! Four short questions answered one step at a time. Completing the last
//! step marks the day's check-in as done.

use crate::error::{WellnessError, WellnessResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Input kind of a check-in question
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CheckInKind {
    Number { min: f64, max: f64 },
    Select(&'static [&'static str]),
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckInQuestion {
    pub id: &'static str,
    pub question: &'static str,
    pub kind: CheckInKind,
    pub placeholder: Option<&'static str>,
}

pub const ENERGY_OPTIONS: &[&str] = &["Very Low", "Low", "Moderate", "High", "Very High"];
pub const STRESS_OPTIONS: &[&str] = &["Not at all", "Slightly", "Moderately", "Very", "Extremely"];

pub const CHECK_IN_QUESTIONS: [CheckInQuestion; 4] = [
    CheckInQuestion {
        id: "sleep",
        question: "How many hours did you sleep last night?",
        kind: CheckInKind::Number { min: 0.0, max: 24.0 },
        placeholder: Some("Enter hours (e.g., 7.5)"),
    },
    CheckInQuestion {
        id: "energy",
        question: "How would you rate your energy level this morning?",
        kind: CheckInKind::Select(ENERGY_OPTIONS),
        placeholder: None,
    },
    CheckInQuestion {
        id: "stress",
        question: "How stressed do you feel right now?",
        kind: CheckInKind::Select(STRESS_OPTIONS),
        placeholder: None,
    },
    CheckInQuestion {
        id: "goals",
        question: "What's your main goal for today?",
        kind: CheckInKind::Text,
        placeholder: Some("e.g., Complete the project proposal"),
    },
];

impl CheckInQuestion {
    /// Validate and normalize an answer for this question
    pub fn validate(&self, value: &str) -> WellnessResult<String> {
        let value = value.trim();
        let invalid = |reason: String| WellnessError::InvalidCheckInAnswer {
            question: self.id.to_string(),
            reason,
        };
        match self.kind {
            CheckInKind::Number { min, max } => {
                let n: f64 = value
                    .parse()
                    .map_err(|_| invalid(format!("'{value}' is not a number")))?;
                if !(min..=max).contains(&n) {
                    return Err(invalid(format!("{n} is outside {min}-{max}")));
                }
                Ok(value.to_string())
            }
            CheckInKind::Select(options) => options
                .iter()
                .find(|o| o.eq_ignore_ascii_case(value))
                .map(|o| o.to_string())
                .ok_or_else(|| invalid(format!("expected one of: {}", options.join(", ")))),
            CheckInKind::Text if value.is_empty() => Err(invalid("answer required".into())),
            CheckInKind::Text => Ok(value.to_string()),
        }
    }
}

pub fn find_check_in_question(id: &str) -> Option<&'static CheckInQuestion> {
    CHECK_IN_QUESTIONS.iter().find(|q| q.id == id)
}

/// Persisted check-in state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckInState {
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub last_check_in_date: Option<NaiveDate>,
    #[serde(default)]
    pub answers: BTreeMap<String, String>,
}

impl CheckInState {
    /// Whether the check-in should be offered on `today`
    pub fn is_due(&self, today: NaiveDate) -> bool {
        if !self.completed {
            return true;
        }
        self.last_check_in_date != Some(today)
    }

    /// Record a finished wizard
    pub fn complete(&mut self, answers: BTreeMap<String, String>, today: NaiveDate) {
        self.completed = true;
        self.last_check_in_date = Some(today);
        self.answers = answers;
    }

    /// Clear the completion flag so the check-in is offered again
    pub fn reset(&mut self) {
        self.completed = false;
    }
}

/// Outcome of moving forward in the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardProgress {
    Step(usize),
    Finished,
}

/// Step-by-step check-in wizard
#[derive(Debug, Clone, Default)]
pub struct CheckInWizard {
    step: usize,
    answers: BTreeMap<String, String>,
    finished: bool,
}

impl CheckInWizard {
    /// Start a new check-in with no answers
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn current_question(&self) -> &'static CheckInQuestion {
        &CHECK_IN_QUESTIONS[self.step]
    }

    /// Answer the question at the current step
    pub fn answer(&mut self, value: &str) -> WellnessResult<()> {
        let question = self.current_question();
        let normalized = question.validate(value)?;
        self.answers.insert(question.id.to_string(), normalized);
        Ok(())
    }

    /// Answer any question by id
    pub fn set_answer(&mut self, question_id: &str, value: &str) -> WellnessResult<()> {
        let question = find_check_in_question(question_id).ok_or_else(|| {
            WellnessError::InvalidCheckInAnswer {
                question: question_id.to_string(),
                reason: "unknown question".to_string(),
            }
        })?;
        let normalized = question.validate(value)?;
        self.answers.insert(question.id.to_string(), normalized);
        Ok(())
    }

    /// Advance, or finish when already on the last step. The current
    /// question must be answered first.
    pub fn next(&mut self) -> WellnessResult<WizardProgress> {
        let question = self.current_question();
        if !self.answers.contains_key(question.id) {
            return Err(WellnessError::InvalidCheckInAnswer {
                question: question.id.to_string(),
                reason: "answer required".to_string(),
            });
        }
        if self.step < CHECK_IN_QUESTIONS.len() - 1 {
            self.step += 1;
            Ok(WizardProgress::Step(self.step))
        } else {
            self.finished = true;
            Ok(WizardProgress::Finished)
        }
    }

    /// Go back one step; stays on the first step
    pub fn previous(&mut self) -> usize {
        self.step = self.step.saturating_sub(1);
        self.step
    }

    pub fn answers(&self) -> &BTreeMap<String, String> {
        &self.answers
    }

    pub fn into_answers(self) -> BTreeMap<String, String> {
        self.answers
    }
}
