//! Validation errors for the wellness domain
//!
//! Scoring itself never fails. These errors are raised at the edges, where
//! user input enters the domain types or a flow step is taken out of order.

use thiserror::Error;

/// Errors raised while validating input or advancing a flow
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WellnessError {
    #[error("Unknown question id '{0}'. Run `worksight questions` to list valid ids")]
    UnknownQuestion(String),

    #[error("Rating {value} for '{question}' is out of range (expected 1-5)")]
    RatingOutOfRange { question: String, value: i64 },

    #[error("Malformed answer '{0}', expected <question-id>=<rating>")]
    MalformedAnswer(String),

    #[error("Mood {0} is out of range (expected 1-5)")]
    MoodOutOfRange(i64),

    #[error("Invalid answer for check-in question '{question}': {reason}")]
    InvalidCheckInAnswer { question: String, reason: String },

    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),

    #[error("Unknown suggestion '{0}'")]
    UnknownSuggestion(String),

    #[error("Unknown category '{0}'. Valid categories: all, wellness, productivity, break, focus")]
    UnknownCategory(String),

    #[error("A full name is required to start the assessment")]
    MissingParticipantName,

    #[error("Assessment is incomplete: {answered} of {total} questions answered")]
    IncompleteAssessment { answered: usize, total: usize },

    #[error("Cannot {action} while the assessment is at the {step} step")]
    WrongStep { action: &'static str, step: &'static str },
}

pub type WellnessResult<T> = Result<T, WellnessError>;
