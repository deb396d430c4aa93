//! Burnout assessment: question catalogue, response sets and the
//! info → assessment → results flow.

mod flow;
mod questions;
mod responses;

pub use flow::{AssessmentFlow, AssessmentStep};
pub use questions::{
    find_question, questions_for, scale_label, Question, ScaleOption, MAX_RATING, MIN_RATING,
    QUESTIONS, SCALE,
};
pub use responses::ResponseSet;
