//! Three-step assessment flow: Info → Assessment → Results

use super::questions::QUESTIONS;
use super::responses::ResponseSet;
use crate::error::WellnessError;
use crate::models::{AssessmentResult, ParticipantInfo};
use crate::scoring::BurnoutScorer;
use crate::storage::AssessmentStore;
use anyhow::Result;
use tracing::info;

/// Screen the flow is currently on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssessmentStep {
    Info,
    Assessment,
    Results,
}

impl AssessmentStep {
    fn name(&self) -> &'static str {
        match self {
            AssessmentStep::Info => "info",
            AssessmentStep::Assessment => "assessment",
            AssessmentStep::Results => "results",
        }
    }
}

/// One assessment attempt
#[derive(Debug)]
pub struct AssessmentFlow {
    step: AssessmentStep,
    participant: ParticipantInfo,
    responses: ResponseSet,
    result: Option<AssessmentResult>,
    scorer: BurnoutScorer,
}

impl AssessmentFlow {
    pub fn new(participant: ParticipantInfo) -> Self {
        Self {
            step: AssessmentStep::Info,
            participant,
            responses: ResponseSet::new(),
            result: None,
            scorer: BurnoutScorer::new(),
        }
    }

    pub fn step(&self) -> AssessmentStep {
        self.step
    }

    pub fn participant(&self) -> &ParticipantInfo {
        &self.participant
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    /// Edit participant details; only allowed on the info screen
    pub fn participant_mut(&mut self) -> Result<&mut ParticipantInfo, WellnessError> {
        self.expect_step(AssessmentStep::Info, "edit participant info")?;
        Ok(&mut self.participant)
    }

    /// Leave the info screen. Requires a non-blank full name.
    pub fn start(&mut self) -> Result<(), WellnessError> {
        self.expect_step(AssessmentStep::Info, "start")?;
        if self.participant.full_name.trim().is_empty() {
            return Err(WellnessError::MissingParticipantName);
        }
        self.step = AssessmentStep::Assessment;
        Ok(())
    }

    /// Record or change one answer
    pub fn answer(&mut self, question_id: &str, rating: i64) -> Result<(), WellnessError> {
        self.expect_step(AssessmentStep::Assessment, "answer questions")?;
        self.responses.record(question_id, rating)
    }

    /// Record an answer given as `id=rating`
    pub fn answer_pair(&mut self, pair: &str) -> Result<(), WellnessError> {
        self.expect_step(AssessmentStep::Assessment, "answer questions")?;
        self.responses.record_pair(pair)
    }

    /// (answered, total)
    pub fn progress(&self) -> (usize, usize) {
        (self.responses.answered(), QUESTIONS.len())
    }

    pub fn can_complete(&self) -> bool {
        self.step == AssessmentStep::Assessment && self.responses.is_complete()
    }

    /// Score the answers, append the result to `store` and show results
    pub fn complete<S: AssessmentStore + ?Sized>(&mut self, store: &mut S) -> Result<&AssessmentResult> {
        self.expect_step(AssessmentStep::Assessment, "complete")?;
        if !self.responses.is_complete() {
            let (answered, total) = self.progress();
            return Err(WellnessError::IncompleteAssessment { answered, total }.into());
        }

        let result = self.scorer.assess(&self.responses, self.participant.clone());
        store.save(&result)?;
        info!(
            "Assessment {} completed: {:.2} ({} risk), saved to {} store",
            result.id,
            result.total_score,
            result.risk_level,
            store.name()
        );

        self.step = AssessmentStep::Results;
        Ok(&*self.result.insert(result))
    }

    fn expect_step(&self, expected: AssessmentStep, action: &'static str) -> Result<(), WellnessError> {
        if self.step != expected {
            return Err(WellnessError::WrongStep {
                action,
                step: self.step.name(),
            });
        }
        Ok(())
    }
}
