//! Burnout Assessment Tool question catalogue
//!
//! Based on: Schaufeli, De Witte, & Desart (2020). Twelve items, three per
//! dimension, answered on a five-point frequency scale.

use crate::models::Dimension;
use serde::Serialize;

/// A single questionnaire item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub dimension: Dimension,
}

/// One point on the rating scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScaleOption {
    pub value: u8,
    pub label: &'static str,
}

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

pub const SCALE: [ScaleOption; 5] = [
    ScaleOption { value: 1, label: "Never" },
    ScaleOption { value: 2, label: "Rarely" },
    ScaleOption { value: 3, label: "Sometimes" },
    ScaleOption { value: 4, label: "Often" },
    ScaleOption { value: 5, label: "Always" },
];

pub const QUESTIONS: [Question; 12] = [
    // Exhaustion
    Question {
        id: "ex1",
        text: "At work, I feel mentally exhausted.",
        dimension: Dimension::Exhaustion,
    },
    Question {
        id: "ex2",
        text: "At work, I feel emotionally exhausted.",
        dimension: Dimension::Exhaustion,
    },
    Question {
        id: "ex3",
        text: "After a day's work, I find it hard to recover my energy.",
        dimension: Dimension::Exhaustion,
    },
    // Mental distance
    Question {
        id: "md1",
        text: "I struggle to find any enthusiasm for my work.",
        dimension: Dimension::MentalDistance,
    },
    Question {
        id: "md2",
        text: "I feel indifferent about my job.",
        dimension: Dimension::MentalDistance,
    },
    Question {
        id: "md3",
        text: "I feel emotionally detached from my work.",
        dimension: Dimension::MentalDistance,
    },
    // Cognitive impairment
    Question {
        id: "ci1",
        text: "At work, I have trouble concentrating.",
        dimension: Dimension::CognitiveImpairment,
    },
    Question {
        id: "ci2",
        text: "I find it hard to think clearly at work.",
        dimension: Dimension::CognitiveImpairment,
    },
    Question {
        id: "ci3",
        text: "I forget what I'm doing at work.",
        dimension: Dimension::CognitiveImpairment,
    },
    // Emotional impairment
    Question {
        id: "ei1",
        text: "At work, I can't control my emotions.",
        dimension: Dimension::EmotionalImpairment,
    },
    Question {
        id: "ei2",
        text: "I often feel angry or frustrated at work.",
        dimension: Dimension::EmotionalImpairment,
    },
    Question {
        id: "ei3",
        text: "Even small setbacks at work feel overwhelming.",
        dimension: Dimension::EmotionalImpairment,
    },
];

/// Look up a question by id
pub fn find_question(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

/// Questions belonging to one dimension, in catalogue order
pub fn questions_for(dimension: Dimension) -> impl Iterator<Item = &'static Question> {
    QUESTIONS.iter().filter(move |q| q.dimension == dimension)
}

/// Label of a rating value, if it is on the scale
pub fn scale_label(value: u8) -> Option<&'static str> {
    SCALE.iter().find(|o| o.value == value).map(|o| o.label)
}
