//! Burnout scorer

use crate::assessment::{ResponseSet, QUESTIONS};
use crate::models::{
    AssessmentResult, Dimension, DimensionScore, DimensionScores, ParticipantInfo, RiskLevel,
};
use std::collections::BTreeMap;
use tracing::debug;

/// Scores without the per-attempt metadata (id, timestamp, participant)
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub dimensions: DimensionScores,
    pub total_score: f64,
    pub risk_level: RiskLevel,
}

/// Stateless burnout scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct BurnoutScorer;

impl BurnoutScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score a complete or partial response set
    pub fn score(&self, responses: &ResponseSet) -> ScoreBreakdown {
        // Partition by dimension through the static catalogue; ids outside
        // the catalogue are never looked up.
        let mut by_dimension: BTreeMap<Dimension, Vec<u8>> = BTreeMap::new();
        for question in QUESTIONS.iter() {
            if let Some(rating) = responses.get(question.id) {
                by_dimension.entry(question.dimension).or_default().push(rating);
            }
        }

        let dimension_score = |dimension: Dimension| -> DimensionScore {
            match by_dimension.get(&dimension) {
                Some(ratings) if !ratings.is_empty() => DimensionScore::Scored {
                    mean: ratings.iter().map(|&r| r as f64).sum::<f64>() / ratings.len() as f64,
                    responses: ratings.len(),
                },
                _ => DimensionScore::NoResponses,
            }
        };

        let dimensions = DimensionScores {
            exhaustion: dimension_score(Dimension::Exhaustion),
            mental_distance: dimension_score(Dimension::MentalDistance),
            cognitive_impairment: dimension_score(Dimension::CognitiveImpairment),
            emotional_impairment: dimension_score(Dimension::EmotionalImpairment),
        };

        let total_score = dimensions.total();
        let risk_level = RiskLevel::from_score(total_score);

        debug!(
            "Burnout scores: exhaustion={:.2}, mental_distance={:.2}, cognitive={:.2}, emotional={:.2}, total={:.2} ({})",
            dimensions.exhaustion.value(),
            dimensions.mental_distance.value(),
            dimensions.cognitive_impairment.value(),
            dimensions.emotional_impairment.value(),
            total_score,
            risk_level
        );

        ScoreBreakdown {
            dimensions,
            total_score,
            risk_level,
        }
    }

    /// Score a response set and stamp it as a finished assessment
    pub fn assess(&self, responses: &ResponseSet, participant: ParticipantInfo) -> AssessmentResult {
        let breakdown = self.score(responses);
        AssessmentResult {
            id: uuid::Uuid::new_v4(),
            dimensions: breakdown.dimensions,
            total_score: breakdown.total_score,
            risk_level: breakdown.risk_level,
            recommendations: breakdown
                .risk_level
                .recommendations()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            completed_at: chrono::Utc::now(),
            participant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(set: &ResponseSet) -> ScoreBreakdown {
        BurnoutScorer::new().score(set)
    }

    #[test]
    fn test_all_ones_is_low() {
        let b = score(&ResponseSet::uniform(1));
        for (_, d) in b.dimensions.iter() {
            assert_eq!(d.value(), 1.0);
        }
        assert_eq!(b.total_score, 1.0);
        assert_eq!(b.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_all_fives_is_high() {
        let b = score(&ResponseSet::uniform(5));
        for (_, d) in b.dimensions.iter() {
            assert_eq!(d.value(), 5.0);
        }
        assert_eq!(b.total_score, 5.0);
        assert_eq!(b.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_three_is_moderate_boundary() {
        let b = score(&ResponseSet::uniform(3));
        assert_eq!(b.total_score, 3.0);
        assert_eq!(b.risk_level, RiskLevel::Moderate);
    }

    #[test]
    fn test_four_is_high_boundary() {
        let b = score(&ResponseSet::uniform(4));
        assert_eq!(b.total_score, 4.0);
        assert_eq!(b.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_empty_set_scores_zero() {
        let b = score(&ResponseSet::new());
        for (_, d) in b.dimensions.iter() {
            assert_eq!(*d, DimensionScore::NoResponses);
            assert_eq!(d.value(), 0.0);
        }
        assert_eq!(b.total_score, 0.0);
        assert_eq!(b.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_missing_dimension_pulls_total_down() {
        // Everything but emotional impairment answered with 5
        let set = ResponseSet::from_raw(
            QUESTIONS
                .iter()
                .filter(|q| q.dimension != Dimension::EmotionalImpairment)
                .map(|q| (q.id, 5u8)),
        );
        let b = score(&set);
        assert_eq!(b.dimensions.emotional_impairment, DimensionScore::NoResponses);
        assert_eq!(b.total_score, 3.75);
        assert_eq!(b.risk_level, RiskLevel::Moderate);
    }

    #[test]
    fn test_dimension_mean_over_answered_items() {
        let set = ResponseSet::from_raw([("ex1", 5u8), ("ex2", 2), ("md1", 4)]);
        let b = score(&set);
        assert_eq!(
            b.dimensions.exhaustion,
            DimensionScore::Scored { mean: 3.5, responses: 2 }
        );
        assert_eq!(
            b.dimensions.mental_distance,
            DimensionScore::Scored { mean: 4.0, responses: 1 }
        );
        assert_eq!(b.total_score, 1.875);
    }

    #[test]
    fn test_unknown_ids_and_zero_ratings_ignored() {
        let set = ResponseSet::from_raw([("zz1", 5u8), ("ex1", 0), ("ex2", 3)]);
        let b = score(&set);
        assert_eq!(
            b.dimensions.exhaustion,
            DimensionScore::Scored { mean: 3.0, responses: 1 }
        );
    }

    #[test]
    fn test_mixed_complete_set_within_bounds() {
        let ratings = [1u8, 2, 3, 4, 5, 1, 2, 3, 4, 5, 3, 3];
        let set = ResponseSet::from_raw(QUESTIONS.iter().map(|q| q.id).zip(ratings));
        let b = score(&set);
        for (_, d) in b.dimensions.iter() {
            assert!((1.0..=5.0).contains(&d.value()));
        }
        assert!((1.0..=5.0).contains(&b.total_score));
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let set = ResponseSet::from_raw([("ex1", 4u8), ("ci2", 2), ("ei3", 5)]);
        let scorer = BurnoutScorer::new();
        let first = scorer.assess(&set, ParticipantInfo::default());
        let second = scorer.assess(&set, ParticipantInfo::default());
        assert_eq!(first.dimensions, second.dimensions);
        assert_eq!(first.total_score, second.total_score);
        assert_eq!(first.risk_level, second.risk_level);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_assess_attaches_recommendations() {
        let result = BurnoutScorer::new().assess(&ResponseSet::uniform(3), ParticipantInfo::default());
        assert_eq!(result.risk_level, RiskLevel::Moderate);
        assert_eq!(result.recommendations.len(), 4);
        assert_eq!(
            result.recommendations[0],
            "Monitor your stress levels and take proactive steps"
        );
    }
}
