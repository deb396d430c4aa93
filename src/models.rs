//! Core data models for WorkSight
//!
//! These models are shared by the scorer, the storage layer and the
//! reporters: burnout dimensions, risk levels, dimension scores and the
//! assessment result that gets appended to the history log.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Burnout sub-scales measured by the assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    Exhaustion,
    MentalDistance,
    CognitiveImpairment,
    EmotionalImpairment,
}

impl Dimension {
    /// All dimensions in catalogue order
    pub const ALL: [Dimension; 4] = [
        Dimension::Exhaustion,
        Dimension::MentalDistance,
        Dimension::CognitiveImpairment,
        Dimension::EmotionalImpairment,
    ];

    /// Human-readable title
    pub fn title(&self) -> &'static str {
        match self {
            Dimension::Exhaustion => "Exhaustion",
            Dimension::MentalDistance => "Mental Distance",
            Dimension::CognitiveImpairment => "Cognitive Impairment",
            Dimension::EmotionalImpairment => "Emotional Impairment",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Exhaustion => write!(f, "exhaustion"),
            Dimension::MentalDistance => write!(f, "mental-distance"),
            Dimension::CognitiveImpairment => write!(f, "cognitive-impairment"),
            Dimension::EmotionalImpairment => write!(f, "emotional-impairment"),
        }
    }
}

/// Risk classification of a burnout score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

/// Lower bound (inclusive) of the High band
pub const HIGH_RISK_THRESHOLD: f64 = 4.0;
/// Lower bound (inclusive) of the Moderate band
pub const MODERATE_RISK_THRESHOLD: f64 = 3.0;

const HIGH_RISK_ADVICE: [&str; 4] = [
    "Consider speaking with HR or a mental health professional",
    "Take regular breaks and practice stress management techniques",
    "Discuss workload concerns with your manager",
    "Prioritize self-care and work-life balance",
];

const MODERATE_RISK_ADVICE: [&str; 4] = [
    "Monitor your stress levels and take proactive steps",
    "Practice mindfulness and relaxation techniques",
    "Set clear boundaries between work and personal time",
    "Consider discussing workload with your manager",
];

const LOW_RISK_ADVICE: [&str; 4] = [
    "Continue maintaining healthy work habits",
    "Stay aware of stress triggers",
    "Keep up with regular breaks and self-care",
    "Support colleagues who may be struggling",
];

impl RiskLevel {
    /// Classify a score, evaluating bands from high to low
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= HIGH_RISK_THRESHOLD => RiskLevel::High,
            s if s >= MODERATE_RISK_THRESHOLD => RiskLevel::Moderate,
            _ => RiskLevel::Low,
        }
    }

    /// Fixed advisory list for this level
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            RiskLevel::High => &HIGH_RISK_ADVICE,
            RiskLevel::Moderate => &MODERATE_RISK_ADVICE,
            RiskLevel::Low => &LOW_RISK_ADVICE,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// Score of a single dimension
///
/// A dimension without any responses is kept distinguishable from one that
/// genuinely averaged out low, but it still contributes 0 to the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum DimensionScore {
    Scored { mean: f64, responses: usize },
    NoResponses,
}

impl DimensionScore {
    /// Numeric value used in the total (0 for `NoResponses`)
    pub fn value(&self) -> f64 {
        match self {
            DimensionScore::Scored { mean, .. } => *mean,
            DimensionScore::NoResponses => 0.0,
        }
    }

    pub fn responses(&self) -> usize {
        match self {
            DimensionScore::Scored { responses, .. } => *responses,
            DimensionScore::NoResponses => 0,
        }
    }

    pub fn is_scored(&self) -> bool {
        matches!(self, DimensionScore::Scored { .. })
    }

    /// Band of this dimension using the same thresholds as the total
    pub fn band(&self) -> RiskLevel {
        RiskLevel::from_score(self.value())
    }
}

/// The four dimension scores of one assessment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub exhaustion: DimensionScore,
    pub mental_distance: DimensionScore,
    pub cognitive_impairment: DimensionScore,
    pub emotional_impairment: DimensionScore,
}

impl DimensionScores {
    pub fn get(&self, dimension: Dimension) -> &DimensionScore {
        match dimension {
            Dimension::Exhaustion => &self.exhaustion,
            Dimension::MentalDistance => &self.mental_distance,
            Dimension::CognitiveImpairment => &self.cognitive_impairment,
            Dimension::EmotionalImpairment => &self.emotional_impairment,
        }
    }

    /// Dimension scores in catalogue order
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &DimensionScore)> + '_ {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    /// Unweighted mean over all four dimensions
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, s)| s.value()).sum::<f64>() / Dimension::ALL.len() as f64
    }
}

/// Optional participant details collected before the assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantInfo {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub department: String,
    pub date: NaiveDate,
}

impl ParticipantInfo {
    pub fn new(full_name: impl Into<String>, department: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            full_name: full_name.into(),
            department: department.into(),
            date,
        }
    }
}

impl Default for ParticipantInfo {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            department: String::new(),
            date: chrono::Local::now().date_naive(),
        }
    }
}

/// Result of one completed burnout assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub id: Uuid,
    pub dimensions: DimensionScores,
    pub total_score: f64,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
    pub completed_at: DateTime<Utc>,
    pub participant: ParticipantInfo,
}
