//! Response sets: per-question ratings for one assessment attempt

use super::questions::{find_question, MAX_RATING, MIN_RATING, QUESTIONS};
use crate::error::{WellnessError, WellnessResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from question id to rating
///
/// `record` validates against the catalogue and the 1-5 scale. Sets built
/// with `from_raw` or deserialized from disk are taken as-is; the scorer
/// ignores unknown ids and treats a rating of 0 as unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet {
    ratings: BTreeMap<String, u8>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set without validation
    pub fn from_raw<I, K>(ratings: I) -> Self
    where
        I: IntoIterator<Item = (K, u8)>,
        K: Into<String>,
    {
        Self {
            ratings: ratings.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Every catalogue question answered with the same rating
    pub fn uniform(rating: u8) -> Self {
        Self::from_raw(QUESTIONS.iter().map(|q| (q.id, rating)))
    }

    /// Record (or change) the answer to one question
    pub fn record(&mut self, question_id: &str, rating: i64) -> WellnessResult<()> {
        if find_question(question_id).is_none() {
            return Err(WellnessError::UnknownQuestion(question_id.to_string()));
        }
        if rating < MIN_RATING as i64 || rating > MAX_RATING as i64 {
            return Err(WellnessError::RatingOutOfRange {
                question: question_id.to_string(),
                value: rating,
            });
        }
        self.ratings.insert(question_id.to_string(), rating as u8);
        Ok(())
    }

    /// Parse and record an answer of the form `ex1=4`
    pub fn record_pair(&mut self, pair: &str) -> WellnessResult<()> {
        let (id, value) = pair
            .split_once('=')
            .ok_or_else(|| WellnessError::MalformedAnswer(pair.to_string()))?;
        let rating: i64 = value
            .trim()
            .parse()
            .map_err(|_| WellnessError::MalformedAnswer(pair.to_string()))?;
        self.record(id.trim(), rating)
    }

    /// Rating for a question, if it counts as answered
    pub fn get(&self, question_id: &str) -> Option<u8> {
        self.ratings.get(question_id).copied().filter(|&r| r != 0)
    }

    /// Number of catalogue questions answered
    pub fn answered(&self) -> usize {
        QUESTIONS.iter().filter(|q| self.get(q.id).is_some()).count()
    }

    /// True once every catalogue question has an answer
    pub fn is_complete(&self) -> bool {
        self.answered() == QUESTIONS.len()
    }

    /// Catalogue ids still without an answer
    pub fn missing(&self) -> Vec<&'static str> {
        QUESTIONS
            .iter()
            .filter(|q| self.get(q.id).is_none())
            .map(|q| q.id)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.ratings.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
