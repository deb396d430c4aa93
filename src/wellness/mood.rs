//! Mood rating and per-day mood history

use crate::error::WellnessError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Self-reported mood on a five-point scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MoodLevel {
    VeryLow = 1,
    Low = 2,
    Neutral = 3,
    Good = 4,
    Great = 5,
}

impl MoodLevel {
    pub const ALL: [MoodLevel; 5] = [
        MoodLevel::VeryLow,
        MoodLevel::Low,
        MoodLevel::Neutral,
        MoodLevel::Good,
        MoodLevel::Great,
    ];

    pub fn value(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoodLevel::VeryLow => "Very Low",
            MoodLevel::Low => "Low",
            MoodLevel::Neutral => "Neutral",
            MoodLevel::Good => "Good",
            MoodLevel::Great => "Great",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MoodLevel::VeryLow => "Feeling overwhelmed",
            MoodLevel::Low => "A bit down",
            MoodLevel::Neutral => "Okay",
            MoodLevel::Good => "Feeling positive",
            MoodLevel::Great => "Excellent mood",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MoodLevel::VeryLow => "😢",
            MoodLevel::Low => "😕",
            MoodLevel::Neutral => "😐",
            MoodLevel::Good => "🙂",
            MoodLevel::Great => "😊",
        }
    }

    /// Validate a raw value coming from the command line
    pub fn from_value(value: i64) -> Result<Self, WellnessError> {
        match value {
            1 => Ok(MoodLevel::VeryLow),
            2 => Ok(MoodLevel::Low),
            3 => Ok(MoodLevel::Neutral),
            4 => Ok(MoodLevel::Good),
            5 => Ok(MoodLevel::Great),
            other => Err(WellnessError::MoodOutOfRange(other)),
        }
    }
}

impl TryFrom<u8> for MoodLevel {
    type Error = WellnessError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value as i64)
    }
}

impl From<MoodLevel> for u8 {
    fn from(mood: MoodLevel) -> Self {
        mood.value()
    }
}

impl std::fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}/5)", self.label(), self.value())
    }
}

/// Mood recorded for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: MoodLevel,
}

/// Mood history holding at most one entry per day, in recording order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodHistory {
    entries: Vec<MoodEntry>,
}

impl MoodHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mood for `date`, replacing any earlier entry for that day
    pub fn record(&mut self, date: NaiveDate, mood: MoodLevel) {
        self.entries.retain(|e| e.date != date);
        self.entries.push(MoodEntry { date, mood });
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<MoodEntry> for MoodHistory {
    fn from_iter<I: IntoIterator<Item = MoodEntry>>(iter: I) -> Self {
        let mut history = MoodHistory::new();
        for entry in iter {
            history.record(entry.date, entry.mood);
        }
        history
    }
}
